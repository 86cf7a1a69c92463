//! 网关 CRUD handlers
//!
//! 提供网关资源的增删改查接口：
//! - GET /gateways - 列出网关（支持 q/skip/limit）
//! - POST /gateways - 创建网关
//! - GET /gateways/{id} - 获取网关详情
//! - PUT /gateways/{id} - 更新网关
//! - DELETE /gateways/{id} - 删除网关
//!
//! 权限要求：
//! - 读取接口匿名可用
//! - 创建/更新需要 USER 或 ADMIN 角色
//! - 删除仅限 ADMIN 角色
//!
//! 认证与角色检查先于请求体/路径校验；id 格式先于服务调用校验
//! （非 UUID 的 id 是 400，格式合法但不存在才是 404）。

use crate::AppState;
use crate::middleware::require_role;
use crate::utils::response::{bad_request_error, gateway_to_dto, registry_error};
use crate::utils::{
    ensure_uuid, normalize_ip4, normalize_ip4_optional, normalize_optional, normalize_required,
    require_json,
};
use api_contract::{
    CreateGatewayRequest, CreatedResponse, GatewayDto, MessageResponse, UpdateGatewayRequest,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use domain::Role;
use fleet_registry::NewGateway;
use fleet_storage::GatewayUpdate;

#[derive(serde::Deserialize)]
pub struct GatewayPath {
    gateway_id: String,
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    q: Option<String>,
    skip: Option<u64>,
    limit: Option<u64>,
}

/// 列出网关
///
/// 匿名查询网关列表，支持关键字过滤与偏移分页。
///
/// # 参数
///
/// - `state`: 应用状态，包含 `gateways` 服务实例
/// - `query`: 查询参数 `q`（name 子串过滤）、`skip`（默认 0）、`limit`（默认 10）
///
/// # 返回
///
/// 成功时返回 `200 OK` 和网关 DTO 数组（可能为空）。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: skip/limit 不是非负整数
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn list_gateways(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return bad_request_error(rejection.body_text()),
    };
    match state
        .gateways
        .find_all(query.q.as_deref(), query.skip, query.limit)
        .await
    {
        Ok(items) => {
            let data: Vec<GatewayDto> = items.into_iter().map(gateway_to_dto).collect();
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(err) => registry_error(err),
    }
}

/// 获取网关详情
///
/// 匿名查询单个网关。
///
/// # 参数
///
/// - `state`: 应用状态
/// - `path`: 路径参数，包含 `gateway_id`
///
/// # 返回
///
/// 成功时返回 `200 OK` 和网关 DTO。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 不是合法 UUID
/// - `404 NOT FOUND`: 网关不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn get_gateway(State(state): State<AppState>, Path(path): Path<GatewayPath>) -> Response {
    if let Err(response) = ensure_uuid(&path.gateway_id, "gateway id") {
        return response;
    }
    match state.gateways.find_by_id(&path.gateway_id).await {
        Ok(item) => (StatusCode::OK, Json(gateway_to_dto(item))).into_response(),
        Err(err) => registry_error(err),
    }
}

/// 创建网关
///
/// 创建新网关并返回其 id。
///
/// # 参数
///
/// - `state`: 应用状态
/// - `headers`: HTTP 请求头，用于提取 Bearer token 进行认证
/// - `payload`: 请求体，包含 `serial`、`name`、`ip4address`（全部必填）
///
/// # 返回
///
/// 成功时返回 `201 CREATED` 和 `{"id": "..."}`。
///
/// # 流程
///
/// 1. 调用 `require_role` 验证 Bearer token 和角色（USER 或 ADMIN）
/// 2. 解包请求体（反序列化失败为 400）
/// 3. 规范化必填字段，`ip4address` 必须是合法 IPv4 地址
/// 4. 调用 `GatewayService::save` 铸造 id 并落库
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 请求体不合法或字段校验失败
/// - `401 UNAUTHORIZED`: 未提供 token 或 token 无效/已过期
/// - `403 FORBIDDEN`: 角色不满足要求
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_gateway(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateGatewayRequest>, JsonRejection>,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::User, Role::Admin]) {
        return response;
    }
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let serial = match normalize_required(req.serial, "serial") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let ip4address = match normalize_ip4(req.ip4address, "ip4address") {
        Ok(value) => value,
        Err(response) => return response,
    };
    match state
        .gateways
        .save(NewGateway {
            serial,
            name,
            ip4address,
        })
        .await
    {
        Ok(item) => (
            StatusCode::CREATED,
            Json(CreatedResponse {
                id: item.gateway_id,
            }),
        )
            .into_response(),
        Err(err) => registry_error(err),
    }
}

/// 更新网关
///
/// 合并更新指定网关，至少需要提供一个更新字段。
///
/// # 参数
///
/// - `state`: 应用状态
/// - `path`: 路径参数，包含 `gateway_id`
/// - `headers`: HTTP 请求头，用于提取 Bearer token 进行认证
/// - `payload`: 请求体，`serial`/`name`/`ip4address` 均可选
///
/// # 返回
///
/// 成功时返回 `204 NO CONTENT`，无响应体。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 非 UUID、请求体不合法、字段校验失败或无更新字段
/// - `401 UNAUTHORIZED`: 认证失败
/// - `403 FORBIDDEN`: 角色不满足要求
/// - `404 NOT FOUND`: 网关不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn update_gateway(
    State(state): State<AppState>,
    Path(path): Path<GatewayPath>,
    headers: HeaderMap,
    payload: Result<Json<UpdateGatewayRequest>, JsonRejection>,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::User, Role::Admin]) {
        return response;
    }
    if let Err(response) = ensure_uuid(&path.gateway_id, "gateway id") {
        return response;
    }
    let req = match require_json(payload) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let serial = match normalize_optional(req.serial, "serial") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let ip4address = match normalize_ip4_optional(req.ip4address, "ip4address") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if serial.is_none() && name.is_none() && ip4address.is_none() {
        return bad_request_error("empty update");
    }
    let update = GatewayUpdate {
        serial,
        name,
        ip4address,
    };
    match state.gateways.update(&path.gateway_id, update).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => registry_error(err),
    }
}

/// 删除网关
///
/// 删除指定网关。设备以弱引用关联网关，删除网关不级联删除设备。
///
/// # 参数
///
/// - `state`: 应用状态
/// - `path`: 路径参数，包含 `gateway_id`
/// - `headers`: HTTP 请求头，用于提取 Bearer token 进行认证
///
/// # 返回
///
/// 成功时返回 `200 OK` 和确认消息。删除不幂等：重复删除同一 id 返回 404。
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: id 不是合法 UUID
/// - `401 UNAUTHORIZED`: 认证失败
/// - `403 FORBIDDEN`: 非 ADMIN 角色
/// - `404 NOT FOUND`: 网关不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn delete_gateway(
    State(state): State<AppState>,
    Path(path): Path<GatewayPath>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = require_role(&state, &headers, &[Role::Admin]) {
        return response;
    }
    if let Err(response) = ensure_uuid(&path.gateway_id, "gateway id") {
        return response;
    }
    match state.gateways.delete_by_id(&path.gateway_id).await {
        Ok(item) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: format!("gateway with id: {} deleted", item.gateway_id),
            }),
        )
            .into_response(),
        Err(err) => registry_error(err),
    }
}
