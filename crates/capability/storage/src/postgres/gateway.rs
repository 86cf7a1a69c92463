//! Postgres 网关存储实现
//!
//! 通过 SQL 查询实现网关 CRUD 操作。
//!
//! 设计要点：
//! - 列表查询按 seq 升序，保证稳定的插入顺序分页
//! - 使用参数化 SQL 防止注入

use crate::error::StorageError;
use crate::models::{GatewayRecord, GatewayUpdate};
use crate::traits::GatewayStore;
use sqlx::{PgPool, Row};

pub struct PgGatewayStore {
    pub pool: PgPool,
}

impl PgGatewayStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_gateway(row: &sqlx::postgres::PgRow) -> Result<GatewayRecord, StorageError> {
    Ok(GatewayRecord {
        gateway_id: row.try_get("gateway_id")?,
        serial: row.try_get("serial")?,
        name: row.try_get("name")?,
        ip4address: row.try_get("ip4address")?,
    })
}

#[async_trait::async_trait]
impl GatewayStore for PgGatewayStore {
    /// 列出网关（过滤 → skip → limit）
    async fn list_gateways(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<GatewayRecord>, StorageError> {
        let rows = if let Some(keyword) = keyword {
            sqlx::query(
                "select gateway_id, serial, name, ip4address \
                 from gateways where position($1 in name) > 0 \
                 order by seq asc offset $2 limit $3",
            )
            .bind(keyword)
            .bind(skip as i64)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "select gateway_id, serial, name, ip4address \
                 from gateways order by seq asc offset $1 limit $2",
            )
            .bind(skip as i64)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?
        };
        let mut gateways = Vec::with_capacity(rows.len());
        for row in rows {
            gateways.push(row_to_gateway(&row)?);
        }
        Ok(gateways)
    }

    /// 查找指定网关
    async fn find_gateway(
        &self,
        gateway_id: &str,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let row = sqlx::query(
            "select gateway_id, serial, name, ip4address \
             from gateways where gateway_id = $1",
        )
        .bind(gateway_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_gateway(&row)?))
    }

    /// 创建新网关
    async fn create_gateway(
        &self,
        record: GatewayRecord,
    ) -> Result<GatewayRecord, StorageError> {
        sqlx::query(
            "insert into gateways (gateway_id, serial, name, ip4address) \
             values ($1, $2, $3, $4)",
        )
        .bind(&record.gateway_id)
        .bind(&record.serial)
        .bind(&record.name)
        .bind(&record.ip4address)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    /// 更新网关
    async fn update_gateway(
        &self,
        gateway_id: &str,
        update: GatewayUpdate,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let row = sqlx::query(
            "update gateways set \
             serial = coalesce($1, serial), \
             name = coalesce($2, name), \
             ip4address = coalesce($3, ip4address) \
             where gateway_id = $4 \
             returning gateway_id, serial, name, ip4address",
        )
        .bind(update.serial)
        .bind(update.name)
        .bind(update.ip4address)
        .bind(gateway_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_gateway(&row)?))
    }

    /// 删除网关，返回删除前的记录
    async fn delete_gateway(
        &self,
        gateway_id: &str,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let row = sqlx::query(
            "delete from gateways where gateway_id = $1 \
             returning gateway_id, serial, name, ip4address",
        )
        .bind(gateway_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_gateway(&row)?))
    }

    /// 清空网关表
    async fn delete_all_gateways(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("delete from gateways")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
