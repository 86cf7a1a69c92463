//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：auth_error, forbidden_error, bad_request_error, not_found_error,
//!   conflict_error, internal_auth_error, storage_error, registry_error
//! - DTO 转换：gateway_to_dto, device_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 `{code, message}` 错误体
//! - HTTP 状态码与错误码对应
//! - handler 是领域错误到 HTTP 的唯一翻译点

use api_contract::{ApiError, DeviceDto, GatewayDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_auth::AuthError;
use fleet_registry::RegistryError;
use fleet_storage::{DeviceRecord, GatewayRecord, StorageError};

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiError::new("AUTH.UNAUTHORIZED", "unauthorized")),
    )
        .into_response()
}

/// 禁止访问错误响应
pub fn forbidden_error() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiError::new("AUTH.FORBIDDEN", "forbidden")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new("RESOURCE.NOT_FOUND", message.into())),
    )
        .into_response()
}

/// 资源冲突错误响应
pub fn conflict_error(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ApiError::new("RESOURCE.CONFLICT", message.into())),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 注册服务错误响应：NotFound 映射 404，存储失败映射 500
pub fn registry_error(err: RegistryError) -> Response {
    match err {
        RegistryError::NotFound { .. } => not_found_error(err.to_string()),
        RegistryError::Storage(inner) => storage_error(inner),
    }
}

/// GatewayRecord 转 GatewayDto
pub fn gateway_to_dto(record: GatewayRecord) -> GatewayDto {
    GatewayDto {
        id: record.gateway_id,
        serial: record.serial,
        name: record.name,
        ip4address: record.ip4address,
    }
}

/// DeviceRecord 转 DeviceDto
pub fn device_to_dto(record: DeviceRecord) -> DeviceDto {
    DeviceDto {
        id: record.device_id,
        uid: record.uid,
        vendor: record.vendor,
        status: record.status.as_str().to_string(),
        gateway_id: record.gateway_id,
        created_at: record.created_at_ms,
    }
}
