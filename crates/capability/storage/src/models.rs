//! 数据模型
//!
//! 定义所有存储相关的数据模型和更新结构：
//! - 网关模型：GatewayRecord, GatewayUpdate
//! - 设备模型：DeviceRecord, DeviceUpdate
//! - 用户模型：UserRecord

use domain::{DeviceStatus, Role};

/// 网关记录。
#[derive(Debug, Clone)]
pub struct GatewayRecord {
    pub gateway_id: String,
    pub serial: String,
    pub name: String,
    pub ip4address: String,
}

/// 网关更新输入。
///
/// `None` 表示不修改对应字段。
#[derive(Debug, Clone)]
pub struct GatewayUpdate {
    pub serial: Option<String>,
    pub name: Option<String>,
    pub ip4address: Option<String>,
}

/// 设备记录。
///
/// `gateway_id` 是对网关的弱引用：删除网关不会级联删除设备。
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    pub device_id: String,
    pub uid: String,
    pub vendor: Option<String>,
    pub status: DeviceStatus,
    pub gateway_id: String,
    pub created_at_ms: i64,
}

/// 设备更新输入。
#[derive(Debug, Clone)]
pub struct DeviceUpdate {
    pub uid: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<DeviceStatus>,
    pub gateway_id: Option<String>,
}

/// 用户记录。
///
/// `username` 与 `email` 全局唯一；密码仅以 argon2 哈希形式存储。
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
}

impl UserRecord {
    /// 将用户记录转换为 AuthContext。
    pub fn to_auth_context(&self) -> domain::AuthContext {
        domain::AuthContext::new(
            self.user_id.clone(),
            self.username.clone(),
            self.roles.clone(),
        )
    }
}
