//! 用户内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 根据用户名或邮箱查找用户
//! - 创建用户（唯一性检查在存储层兜底）

use crate::error::StorageError;
use crate::models::UserRecord;
use crate::traits::UserStore;
use std::sync::RwLock;

/// 用户内存存储
///
/// 使用 RwLock + Vec 提供线程安全的内存存储。
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// 创建空的用户存储
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    /// 根据用户名查找用户
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        Ok(self
            .users
            .read()
            .ok()
            .and_then(|list| list.iter().find(|user| user.username == username).cloned()))
    }

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        Ok(self
            .users
            .read()
            .ok()
            .and_then(|list| list.iter().find(|user| user.email == email).cloned()))
    }

    /// 创建新用户
    async fn create_user(&self, record: UserRecord) -> Result<UserRecord, StorageError> {
        let mut list = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if list
            .iter()
            .any(|user| user.username == record.username || user.email == record.email)
        {
            return Err(StorageError::new("user exists"));
        }
        list.push(record.clone());
        Ok(record)
    }

    /// 清空用户表
    async fn delete_all_users(&self) -> Result<u64, StorageError> {
        let mut list = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let removed = list.len() as u64;
        list.clear();
        Ok(removed)
    }
}
