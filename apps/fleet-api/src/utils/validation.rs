//! 输入验证辅助函数
//!
//! 提供统一的输入验证函数：
//! - require_json：解包请求体，反序列化失败统一映射为 400
//! - normalize_required：验证必填字段，去除空格并检查非空
//! - normalize_optional：验证可选字段，如果提供则去除空格并检查非空
//! - normalize_ip4 / normalize_ip4_optional：IPv4 地址字段校验
//! - parse_status / parse_status_optional：设备状态枚举解析
//! - ensure_uuid：路径/引用 id 的格式校验（400 与 404 的分界）
//!
//! 验证规则：
//! - 去除首尾空格
//! - 非空字符串才通过验证
//! - 失败返回 bad_request_error 响应

use crate::utils::response::bad_request_error;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use domain::DeviceStatus;
use std::net::Ipv4Addr;
use uuid::Uuid;

/// 解包 JSON 请求体，反序列化失败映射为 400
///
/// 默认的 axum 拒绝响应用 415/422 区分失败原因，这里统一压成 400，
/// 保持"请求体不合法即 INVALID.REQUEST"的对外契约。
pub fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(bad_request_error(rejection.body_text())),
    }
}

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 验证可选字段，如果提供则去除空格并检查非空
pub fn normalize_optional(value: Option<String>, field: &str) -> Result<Option<String>, Response> {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(bad_request_error(format!("{field} required")));
            }
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// 验证必填的 IPv4 地址字段
pub fn normalize_ip4(value: String, field: &str) -> Result<String, Response> {
    let trimmed = match normalize_required(value, field) {
        Ok(value) => value,
        Err(response) => return Err(response),
    };
    if trimmed.parse::<Ipv4Addr>().is_err() {
        return Err(bad_request_error(format!(
            "{field} must be a valid IPv4 address"
        )));
    }
    Ok(trimmed)
}

/// 验证可选的 IPv4 地址字段
pub fn normalize_ip4_optional(
    value: Option<String>,
    field: &str,
) -> Result<Option<String>, Response> {
    match value {
        Some(value) => normalize_ip4(value, field).map(Some),
        None => Ok(None),
    }
}

/// 解析设备状态，非法值映射为 400
pub fn parse_status(value: String) -> Result<DeviceStatus, Response> {
    match DeviceStatus::parse(value.trim()) {
        Some(status) => Ok(status),
        None => Err(bad_request_error("status must be ONLINE or OFFLINE")),
    }
}

/// 解析可选的设备状态
pub fn parse_status_optional(value: Option<String>) -> Result<Option<DeviceStatus>, Response> {
    match value {
        Some(value) => parse_status(value).map(Some),
        None => Ok(None),
    }
}

/// 校验 id 为合法 UUID
///
/// 格式非法的 id 在调用服务前拦截为 400，与"格式合法但不存在"的 404 区分。
pub fn ensure_uuid(value: &str, field: &str) -> Result<(), Response> {
    if Uuid::parse_str(value).is_err() {
        return Err(bad_request_error(format!("{field} must be a UUID")));
    }
    Ok(())
}
