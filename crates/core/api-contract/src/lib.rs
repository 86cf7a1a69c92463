//! 稳定的 DTO 与 API 错误契约。
//!
//! 成功响应直接返回资源体（裸 JSON），失败响应统一为 [`ApiError`]。

use serde::{Deserialize, Serialize};

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应体。
///
/// 字段名保持 `access_token`（历史契约，非 camelCase）。
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// 注册请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// 创建成功响应体（仅回传新 id）。
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// 删除成功响应体。
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 网关创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGatewayRequest {
    pub serial: String,
    pub name: String,
    pub ip4address: String,
}

/// 网关更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGatewayRequest {
    pub serial: Option<String>,
    pub name: Option<String>,
    pub ip4address: Option<String>,
}

/// 网关返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayDto {
    pub id: String,
    pub serial: String,
    pub name: String,
    pub ip4address: String,
}

/// 设备创建请求体。
///
/// `status` 为字符串形式，由处理层解析为封闭枚举。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    pub uid: String,
    pub vendor: Option<String>,
    pub status: String,
    pub gateway_id: String,
}

/// 设备更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub uid: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<String>,
    pub gateway_id: Option<String>,
}

/// 设备返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub id: String,
    pub uid: String,
    pub vendor: Option<String>,
    pub status: String,
    pub gateway_id: String,
    pub created_at: i64,
}
