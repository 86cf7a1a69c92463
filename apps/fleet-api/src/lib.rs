//! Fleet API：网关/设备注册服务的 HTTP 层。
//!
//! ## 职责划分
//!
//! - `routes`：路径 → handler 映射
//! - `handlers`：HTTP 语义（状态码、校验、错误映射），每个端点一次服务调用
//! - `middleware`：请求追踪 ID 注入、Bearer token 认证与角色检查
//! - `utils`：统一的错误响应构造和 DTO 转换
//! - `seed`：演示数据初始化（由配置开关控制）
//!
//! 业务规则在 `fleet-registry` / `fleet-auth`，存储在 `fleet-storage`；
//! 本 crate 不直接接触 SQL。
//!
//! [`AppState`] 与 [`build_router`] 同时服务于二进制入口和集成测试：
//! 测试用内存存储构建同一个 Router，经 `tower::ServiceExt::oneshot` 驱动。

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod utils;

use axum::Router;
use axum::middleware::from_fn;
use fleet_auth::{AuthService, JwtManager};
use fleet_registry::{DeviceService, GatewayService};
use fleet_storage::{
    InMemoryDeviceStore, InMemoryGatewayStore, InMemoryUserStore, PgDeviceStore, PgGatewayStore,
    PgUserStore, UserStore,
};
use sqlx::PgPool;
use std::sync::Arc;

/// 应用共享状态。
///
/// 服务实例无状态、跨请求共享；`users` 仅供注册查重之外的
/// 种子数据流程直接写入使用。
#[derive(Clone)]
pub struct AppState {
    pub gateways: Arc<GatewayService>,
    pub devices: Arc<DeviceService>,
    pub users: Arc<dyn UserStore>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// 基于内存存储构建状态（测试与本地演示）。
    pub fn with_memory_stores(jwt: JwtManager) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        Self {
            gateways: Arc::new(GatewayService::new(Arc::new(InMemoryGatewayStore::new()))),
            devices: Arc::new(DeviceService::new(Arc::new(InMemoryDeviceStore::new()))),
            users: users.clone(),
            auth: Arc::new(AuthService::new(users, jwt)),
        }
    }

    /// 基于 PostgreSQL 连接池构建状态（生产）。
    pub fn with_postgres(pool: PgPool, jwt: JwtManager) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
        Self {
            gateways: Arc::new(GatewayService::new(Arc::new(PgGatewayStore::new(
                pool.clone(),
            )))),
            devices: Arc::new(DeviceService::new(Arc::new(PgDeviceStore::new(pool)))),
            users: users.clone(),
            auth: Arc::new(AuthService::new(users, jwt)),
        }
    }
}

/// 组装完整的应用 Router：API 路由 + 请求上下文中间件。
pub fn build_router(state: AppState) -> Router {
    routes::create_api_router()
        .with_state(state)
        .layer(from_fn(middleware::request_context))
}
