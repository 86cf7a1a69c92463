//! 认证能力：登录、注册、JWT 生成与校验。

mod jwt;
mod password;

use domain::{AuthContext, Role};
use fleet_storage::{UserRecord, UserStore};
use std::sync::Arc;
use uuid::Uuid;

pub use jwt::JwtManager;
pub use password::{hash_password, verify_password};

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("{0} already in use")]
    Conflict(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

/// 注册输入（已通过请求体校验）。
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// 认证服务实现（基于 UserStore + JWT）。
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    jwt: JwtManager,
}

impl AuthService {
    /// 创建认证服务实例。
    pub fn new(user_store: Arc<dyn UserStore>, jwt: JwtManager) -> Self {
        Self { user_store, jwt }
    }

    /// 登录校验并签发 access token。
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .user_store
            .find_by_username(username)
            .await
            .map_err(|err| AuthError::Internal(err.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(&user.password_hash, password)? {
            return Err(AuthError::InvalidCredentials);
        }
        self.jwt.issue_access(&user.to_auth_context())
    }

    /// 注册新用户。
    ///
    /// 用户名与邮箱先查重（常规路径 409），存储层唯一约束兜底竞态；
    /// 新用户固定获得 USER 角色。
    pub async fn register(&self, registration: Registration) -> Result<UserRecord, AuthError> {
        let existing = self
            .user_store
            .find_by_username(&registration.username)
            .await
            .map_err(|err| AuthError::Internal(err.to_string()))?;
        if existing.is_some() {
            return Err(AuthError::Conflict("username"));
        }
        let existing = self
            .user_store
            .find_by_email(&registration.email)
            .await
            .map_err(|err| AuthError::Internal(err.to_string()))?;
        if existing.is_some() {
            return Err(AuthError::Conflict("email"));
        }

        let password_hash = hash_password(&registration.password)?;
        let record = UserRecord {
            user_id: Uuid::new_v4().to_string(),
            username: registration.username,
            password_hash,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
            roles: vec![Role::User],
        };
        self.user_store
            .create_user(record)
            .await
            .map_err(|err| AuthError::Internal(err.to_string()))
    }

    /// 校验 access token 并提取 AuthContext。
    pub fn verify_access_token(&self, token: &str) -> Result<AuthContext, AuthError> {
        self.jwt.decode_access(token)
    }
}
