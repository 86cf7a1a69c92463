//! Fleet API 服务入口：装配配置、存储后端、认证与路由。

use fleet_api::{AppState, build_router, seed};
use fleet_auth::JwtManager;
use fleet_config::{AppConfig, StoreBackend};
use fleet_storage::connect_pool;
use fleet_telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let jwt = JwtManager::new(config.jwt_secret.clone(), config.jwt_access_ttl_seconds);
    let state = match &config.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store, data is lost on restart");
            AppState::with_memory_stores(jwt)
        }
        StoreBackend::Postgres { database_url } => {
            let pool = connect_pool(database_url).await?;
            AppState::with_postgres(pool, jwt)
        }
    };

    // 演示数据：显式开启才会清空重建，失败则终止启动
    if config.seed_demo_data {
        seed::run(&state).await?;
    }

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "fleet-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
