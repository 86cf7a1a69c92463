//! 设备 CRUD handlers
//!
//! 提供设备资源的增删改查接口：
//! - GET /devices - 列出设备（支持 q/skip/limit，q 匹配 vendor）
//! - POST /devices - 创建设备
//! - GET /devices/{id} - 获取设备详情
//! - PUT /devices/{id} - 更新设备
//! - DELETE /devices/{id} - 删除设备
//!
//! 权限要求：
//! - 读取接口匿名可用
//! - 创建/更新需要 USER 或 ADMIN 角色
//! - 删除仅限 ADMIN 角色
//!
//! `gatewayId` 是弱引用：只校验 UUID 格式，不校验网关存在，
//! 删除网关后设备照常可读（孤儿设备是预期状态）。

use crate::AppState;
use crate::middleware::require_role;
use crate::utils::response::{bad_request_error, device_to_dto, registry_error};
use crate::utils::{
    ensure_uuid, normalize_optional, normalize_required, parse_status, parse_status_optional,
    require_json,
};
use api_contract::{
    CreateDeviceRequest, CreatedResponse, DeviceDto, MessageResponse, UpdateDeviceRequest,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::Role;
use fleet_registry::NewDevice;
use fleet_storage::DeviceUpdate;

#[derive(serde::Deserialize)]
pub struct DevicePath {
    device_id: String,
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    q: Option<String>,
    skip: Option<u64>,
    limit: Option<u64>,
}

/// 列出设备
///
/// 匿名查询设备列表。关键字 `q` 对 vendor 做大小写敏感的子串匹配，
/// 没有 vendor 的设备不会命中任何关键字。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: skip/limit 不是非负整数
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn list_devices(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return bad_request_error(rejection.body_text()),
    };
    match state
        .devices
        .find_all(query.q.as_deref(), query.skip, query.limit)
        .await
    {
        Ok(items) => {
            let data: Vec<DeviceDto> = items.into_iter().map(device_to_dto).collect();
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(err) => registry_error(err),
    }
}

/// 获取设备详情
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 不是合法 UUID
/// - `404 NOT FOUND`: 设备不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn get_device(State(state): State<AppState>, Path(path): Path<DevicePath>) -> Response {
    if let Err(response) = ensure_uuid(&path.device_id, "device id") {
        return response;
    }
    match state.devices.find_by_id(&path.device_id).await {
        Ok(item) => (StatusCode::OK, Json(device_to_dto(item))).into_response(),
        Err(err) => registry_error(err),
    }
}

/// 创建设备
///
/// 创建新设备并返回其 id。`created_at` 由服务在保存时分配。
///
/// # 流程
///
/// 1. 调用 `require_role` 验证 Bearer token 和角色（USER 或 ADMIN）
/// 2. 解包请求体（反序列化失败为 400）
/// 3. 校验字段：`uid` 必填，`vendor` 可选，`status` 必须是 ONLINE/OFFLINE，
///    `gatewayId` 必填且为 UUID（不校验网关存在）
/// 4. 调用 `DeviceService::save` 铸造 id 与创建时间戳并落库
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 请求体不合法或字段校验失败
/// - `401 UNAUTHORIZED`: 未提供 token 或 token 无效/已过期
/// - `403 FORBIDDEN`: 角色不满足要求
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_device(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDeviceRequest>, JsonRejection>,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::User, Role::Admin]) {
        return response;
    }
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let uid = match normalize_required(req.uid, "uid") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let vendor = match normalize_optional(req.vendor, "vendor") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match parse_status(req.status) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let gateway_id = match normalize_required(req.gateway_id, "gatewayId") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if let Err(response) = ensure_uuid(&gateway_id, "gatewayId") {
        return response;
    }
    match state
        .devices
        .save(NewDevice {
            uid,
            vendor,
            status,
            gateway_id,
        })
        .await
    {
        Ok(item) => (
            StatusCode::CREATED,
            Json(CreatedResponse { id: item.device_id }),
        )
            .into_response(),
        Err(err) => registry_error(err),
    }
}

/// 更新设备
///
/// 合并更新指定设备，至少需要提供一个更新字段。
/// `created_at` 不可更新；`gatewayId` 若提供必须是 UUID。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 非 UUID、请求体不合法、字段校验失败或无更新字段
/// - `401 UNAUTHORIZED`: 认证失败
/// - `403 FORBIDDEN`: 角色不满足要求
/// - `404 NOT FOUND`: 设备不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn update_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    headers: HeaderMap,
    payload: Result<Json<UpdateDeviceRequest>, JsonRejection>,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::User, Role::Admin]) {
        return response;
    }
    if let Err(response) = ensure_uuid(&path.device_id, "device id") {
        return response;
    }
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let uid = match normalize_optional(req.uid, "uid") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let vendor = match normalize_optional(req.vendor, "vendor") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match parse_status_optional(req.status) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let gateway_id = match normalize_optional(req.gateway_id, "gatewayId") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if let Some(gateway_id) = gateway_id.as_deref() {
        if let Err(response) = ensure_uuid(gateway_id, "gatewayId") {
            return response;
        }
    }
    if uid.is_none() && vendor.is_none() && status.is_none() && gateway_id.is_none() {
        return bad_request_error("empty update");
    }
    let update = DeviceUpdate {
        uid,
        vendor,
        status,
        gateway_id,
    };
    match state.devices.update(&path.device_id, update).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => registry_error(err),
    }
}

/// 删除设备
///
/// 删除不幂等：重复删除同一 id 返回 404。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 不是合法 UUID
/// - `401 UNAUTHORIZED`: 认证失败
/// - `403 FORBIDDEN`: 非 ADMIN 角色
/// - `404 NOT FOUND`: 设备不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn delete_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::Admin]) {
        return response;
    }
    if let Err(response) = ensure_uuid(&path.device_id, "device id") {
        return response;
    }
    match state.devices.delete_by_id(&path.device_id).await {
        Ok(item) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: format!("device with id: {} deleted", item.device_id),
            }),
        )
            .into_response(),
        Err(err) => registry_error(err),
    }
}
