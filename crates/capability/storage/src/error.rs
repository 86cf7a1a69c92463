//! 存储层错误类型
//!
//! 所有后端共用一个携带消息的错误结构：
//! - Postgres 路径：SQL 执行/连接错误经 `From<sqlx::Error>` 进入
//! - 内存路径：锁中毒等异常用 [`StorageError::new`] 构造
//! - 行解析：status/roles 出现未知枚举值视为数据形态错误

#[derive(Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}
