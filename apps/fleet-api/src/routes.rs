//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 认证接口：/auth/login, /register
//! - 网关管理：/gateways, /gateways/{id}
//! - 设备管理：/devices, /devices/{id}

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router。读取端点匿名可用，
/// 写入端点在 handler 内做 Bearer token 认证与角色检查。
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .route("/register", post(register))
        .route("/gateways", get(list_gateways).post(create_gateway))
        .route(
            "/gateways/:gateway_id",
            get(get_gateway).put(update_gateway).delete(delete_gateway),
        )
        .route("/devices", get(list_devices).post(create_device))
        .route(
            "/devices/:device_id",
            get(get_device).put(update_device).delete(delete_device),
        )
}
