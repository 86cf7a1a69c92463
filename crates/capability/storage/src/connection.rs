//! PostgreSQL 连接池管理
//!
//! 连接池在服务启动时建立一次，由各 Pg*Store 克隆共享，
//! 进程存活期内不重建。连接失败在启动阶段就暴露，
//! 而不是等到第一个请求。

use crate::error::StorageError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// 连接池上限。
const MAX_CONNECTIONS: u32 = 8;

/// 建立 Postgres 连接池
///
/// # 参数
/// - `database_url`：Postgres 连接字符串（来自 `FLEET_DATABASE_URL`）
///
/// # 返回
/// - `Result<PgPool, StorageError>`：连接池或错误
pub async fn connect_pool(database_url: &str) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;
    Ok(pool)
}
