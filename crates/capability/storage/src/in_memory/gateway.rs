//! 网关内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 网关 CRUD 操作
//! - 关键字过滤（name 子串匹配）与偏移分页

use crate::error::StorageError;
use crate::models::{GatewayRecord, GatewayUpdate};
use crate::traits::GatewayStore;
use std::sync::RwLock;

/// 网关内存存储
///
/// 使用 RwLock + Vec 提供线程安全、保持插入顺序的内存存储。
pub struct InMemoryGatewayStore {
    gateways: RwLock<Vec<GatewayRecord>>,
}

impl InMemoryGatewayStore {
    /// 创建新的网关存储
    pub fn new() -> Self {
        Self {
            gateways: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryGatewayStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GatewayStore for InMemoryGatewayStore {
    /// 列出网关（过滤 → skip → limit）
    async fn list_gateways(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<GatewayRecord>, StorageError> {
        let items = self
            .gateways
            .read()
            .map(|list| {
                list.iter()
                    .filter(|item| keyword.is_none_or(|kw| item.name.contains(kw)))
                    .skip(skip as usize)
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    /// 查找指定网关
    async fn find_gateway(
        &self,
        gateway_id: &str,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let item = self
            .gateways
            .read()
            .ok()
            .and_then(|list| list.iter().find(|item| item.gateway_id == gateway_id).cloned());
        Ok(item)
    }

    /// 创建新网关
    async fn create_gateway(
        &self,
        record: GatewayRecord,
    ) -> Result<GatewayRecord, StorageError> {
        let mut list = self
            .gateways
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if list.iter().any(|item| item.gateway_id == record.gateway_id) {
            return Err(StorageError::new("gateway exists"));
        }
        list.push(record.clone());
        Ok(record)
    }

    /// 更新网关
    async fn update_gateway(
        &self,
        gateway_id: &str,
        update: GatewayUpdate,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let mut list = self
            .gateways
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let gateway = match list.iter_mut().find(|item| item.gateway_id == gateway_id) {
            Some(gateway) => gateway,
            None => return Ok(None),
        };
        if let Some(serial) = update.serial {
            gateway.serial = serial;
        }
        if let Some(name) = update.name {
            gateway.name = name;
        }
        if let Some(ip4address) = update.ip4address {
            gateway.ip4address = ip4address;
        }
        Ok(Some(gateway.clone()))
    }

    /// 删除网关，返回删除前的记录
    async fn delete_gateway(
        &self,
        gateway_id: &str,
    ) -> Result<Option<GatewayRecord>, StorageError> {
        let mut list = self
            .gateways
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match list.iter().position(|item| item.gateway_id == gateway_id) {
            Some(index) => Ok(Some(list.remove(index))),
            None => Ok(None),
        }
    }

    /// 清空网关表
    async fn delete_all_gateways(&self) -> Result<u64, StorageError> {
        let mut list = self
            .gateways
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let removed = list.len() as u64;
        list.clear();
        Ok(removed)
    }
}
