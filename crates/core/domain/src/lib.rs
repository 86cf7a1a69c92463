//! 领域模型：身份上下文与封闭枚举（角色、设备状态）。

use serde::{Deserialize, Serialize};

/// 用户角色（封闭集合）。
///
/// 线上形式为 `"USER"` / `"ADMIN"`，与 JWT claims 和存储层共用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// 线上字符串形式。
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// 从线上字符串解析角色；未知值返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// 设备状态（封闭集合）。
///
/// 线上形式为 `"ONLINE"` / `"OFFLINE"`，创建设备时必填。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    /// 线上字符串形式。
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "ONLINE",
            DeviceStatus::Offline => "OFFLINE",
        }
    }

    /// 从线上字符串解析状态；未知值返回 None。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ONLINE" => Some(DeviceStatus::Online),
            "OFFLINE" => Some(DeviceStatus::Offline),
            _ => None,
        }
    }
}

/// 认证上下文：已验证请求的执行身份。
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub username: String,
    pub roles: Vec<Role>,
}

impl AuthContext {
    /// 构造显式身份与角色集合的认证上下文。
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            roles,
        }
    }

    /// 是否持有所需角色之一。
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|role| self.roles.contains(role))
    }
}

impl Default for AuthContext {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self {
            user_id: "".to_string(),
            username: "".to_string(),
            roles: Vec::new(),
        }
    }
}
