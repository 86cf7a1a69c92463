//! Postgres 用户存储实现
//!
//! 通过 SQL 查询实现用户查找与创建。
//!
//! 设计要点：
//! - username 与 email 由唯一约束兜底（并发注册竞态）
//! - roles 列以 text[] 存储，读取时解析为封闭枚举

use crate::error::StorageError;
use crate::models::UserRecord;
use crate::traits::UserStore;
use domain::Role;
use sqlx::{PgPool, Row};

pub struct PgUserStore {
    pub pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<UserRecord, StorageError> {
    let raw_roles: Vec<String> = row.try_get("roles")?;
    let mut roles = Vec::with_capacity(raw_roles.len());
    for raw in raw_roles {
        let role =
            Role::parse(&raw).ok_or_else(|| StorageError::new(format!("unknown role: {raw}")))?;
        roles.push(role);
    }
    Ok(UserRecord {
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        roles,
    })
}

#[async_trait::async_trait]
impl UserStore for PgUserStore {
    /// 根据用户名查找用户
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            "select user_id, username, password_hash, email, first_name, last_name, roles \
             from users where username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_user(&row)?))
    }

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            "select user_id, username, password_hash, email, first_name, last_name, roles \
             from users where email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_user(&row)?))
    }

    /// 创建新用户
    async fn create_user(&self, record: UserRecord) -> Result<UserRecord, StorageError> {
        let roles: Vec<String> = record
            .roles
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();
        sqlx::query(
            "insert into users \
             (user_id, username, password_hash, email, first_name, last_name, roles) \
             values ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&record.user_id)
        .bind(&record.username)
        .bind(&record.password_hash)
        .bind(&record.email)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&roles)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    /// 清空用户表
    async fn delete_all_users(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("delete from users")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
