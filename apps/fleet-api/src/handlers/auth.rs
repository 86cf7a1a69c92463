//! 认证相关 handlers：健康检查、登录、注册
//!
//! ## 提供的端点
//!
//! - `GET /health` - 健康检查，返回 `{"ok": true}`
//! - `POST /auth/login` - 用户登录，验证用户名密码后返回 access token
//! - `POST /register` - 注册新用户，固定授予 USER 角色
//!
//! ## 认证流程
//!
//! ### 登录流程
//! 1. 客户端发送用户名密码
//! 2. 服务端调用 `AuthService::login()` 验证凭据（argon2 哈希比对）
//! 3. 验证成功后签发 HS256 access token（claims：sub/username/roles/exp）
//!
//! ### 注册流程
//! 1. 校验必填字段（username/password/email）
//! 2. `AuthService::register()` 对用户名和邮箱查重，重复返回 409
//! 3. 口令经 argon2 哈希后落库，返回新用户 id
//!
//! 登录凭据不做 trim：口令按原样比对，避免注册与登录间的规范化不一致。

use crate::AppState;
use crate::utils::response::{auth_error, conflict_error, internal_auth_error};
use crate::utils::{normalize_optional, normalize_required, require_json};
use api_contract::{CreatedResponse, LoginRequest, LoginResponse, RegisterRequest};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_auth::{AuthError, Registration};

/// 健康检查端点
///
/// 无需认证，返回简单的健康状态。可用于负载均衡器健康探针或服务监控。
///
/// # Returns
///
/// JSON 响应：`{"ok": true}`，状态码 `200 OK`
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 登录接口
///
/// 验证用户名和密码，成功后返回 access token。
///
/// # Returns
///
/// 成功时返回 `201 CREATED` 和 `{"access_token": "..."}`。
///
/// # Errors
///
/// - `400 BAD REQUEST`: 请求体不是合法 JSON 或缺少字段
/// - `401 UNAUTHORIZED`: 用户名不存在或密码错误（`InvalidCredentials`）
/// - `500 INTERNAL SERVER ERROR`: 认证服务内部错误
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match state.auth.login(&req.username, &req.password).await {
        Ok(access_token) => (
            StatusCode::CREATED,
            Json(LoginResponse { access_token }),
        )
            .into_response(),
        // 用户名或密码错误，返回 401
        Err(AuthError::InvalidCredentials) => auth_error(StatusCode::UNAUTHORIZED),
        // 其他认证服务错误，返回 500
        Err(err) => internal_auth_error(err),
    }
}

/// 注册接口
///
/// 注册新用户并授予 USER 角色。用户名和邮箱全局唯一。
///
/// # Returns
///
/// 成功时返回 `201 CREATED` 和 `{"id": "..."}`（新用户 id）。
///
/// # Errors
///
/// - `400 BAD REQUEST`: 请求体不合法，或必填字段缺失/空白
/// - `409 CONFLICT`: 用户名或邮箱已被占用
/// - `500 INTERNAL SERVER ERROR`: 认证服务内部错误
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let username = match normalize_required(req.username, "username") {
        Ok(value) => value,
        Err(response) => return response,
    };
    // 口令只查非空，不做 trim：保持与登录比对一致
    if req.password.trim().is_empty() {
        return crate::utils::response::bad_request_error("password required");
    }
    let email = match normalize_required(req.email, "email") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let first_name = match normalize_optional(req.first_name, "firstName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let last_name = match normalize_optional(req.last_name, "lastName") {
        Ok(value) => value,
        Err(response) => return response,
    };

    let registration = Registration {
        username,
        password: req.password,
        email,
        first_name,
        last_name,
    };
    match state.auth.register(registration).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(CreatedResponse { id: user.user_id }),
        )
            .into_response(),
        // 用户名或邮箱重复，返回 409
        Err(err @ AuthError::Conflict(_)) => conflict_error(err.to_string()),
        // 其他认证服务错误，返回 500
        Err(err) => internal_auth_error(err),
    }
}
