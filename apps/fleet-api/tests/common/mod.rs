//! 集成测试共用工具：内存后端的完整应用与请求辅助函数。
//!
//! 测试经 `tower::ServiceExt::oneshot` 驱动生产同款 Router，
//! 不真正监听端口。token 由同一 JWT 密钥直接签发，
//! 角色自含在 claims 中，无需先落库用户。

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use domain::{AuthContext, Role};
use fleet_api::{AppState, build_router};
use fleet_auth::JwtManager;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-secret";

pub fn test_jwt() -> JwtManager {
    JwtManager::new(TEST_SECRET.to_string(), 3600)
}

/// 内存后端的完整应用（与生产共用同一 Router 工厂）。
pub fn test_app() -> Router {
    build_router(AppState::with_memory_stores(test_jwt()))
}

/// 签发 USER 角色 token。
pub fn user_token() -> String {
    test_jwt()
        .issue_access(&AuthContext::new("user-1", "amr", vec![Role::User]))
        .unwrap()
}

/// 签发 ADMIN 角色 token。
pub fn admin_token() -> String {
    test_jwt()
        .issue_access(&AuthContext::new("admin-1", "admin", vec![Role::Admin]))
        .unwrap()
}

/// 发送一次请求。`token` 控制 Authorization 头，`body` 为 None 时不带请求体。
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// 读取响应体并解析为 JSON。
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// 断言状态码后返回 JSON 响应体。
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    read_json(response).await
}
