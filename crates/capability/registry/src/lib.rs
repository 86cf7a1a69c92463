//! 资源注册服务：网关与设备的业务层 CRUD。
//!
//! 服务层负责：
//! - 为列表查询套用默认分页（skip=0, limit=10）并规范化关键字
//! - 铸造资源 id（UUID v4）与设备创建时间戳
//! - 将存储层的 `Option` 缺失翻译为 [`RegistryError::NotFound`]
//!
//! 处理层在此之上只做 HTTP 映射，不再感知存储细节。

mod device;
mod gateway;

use fleet_storage::StorageError;

pub use device::{DeviceService, NewDevice};
pub use gateway::{GatewayService, NewGateway};

/// 列表查询的默认偏移。
pub const DEFAULT_SKIP: u64 = 0;
/// 列表查询的默认页长。
pub const DEFAULT_LIMIT: u64 = 10;

/// 注册服务错误。
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl RegistryError {
    pub(crate) fn not_found(resource: &'static str, id: &str) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// 规范化列表参数：空关键字视为无过滤，缺省分页套用默认值。
pub(crate) fn normalize_query(
    keyword: Option<&str>,
    skip: Option<u64>,
    limit: Option<u64>,
) -> (Option<&str>, u64, u64) {
    let keyword = keyword.filter(|kw| !kw.is_empty());
    (
        keyword,
        skip.unwrap_or(DEFAULT_SKIP),
        limit.unwrap_or(DEFAULT_LIMIT),
    )
}
