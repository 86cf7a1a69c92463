//! 设备内存存储实现
//!
//! 仅用于本地演示和测试。
//!
//! 功能：
//! - 设备 CRUD 操作
//! - 关键字过滤（vendor 子串匹配，无 vendor 的设备不命中）与偏移分页

use crate::error::StorageError;
use crate::models::{DeviceRecord, DeviceUpdate};
use crate::traits::DeviceStore;
use std::sync::RwLock;

/// 设备内存存储
///
/// 使用 RwLock + Vec 提供线程安全、保持插入顺序的内存存储。
pub struct InMemoryDeviceStore {
    devices: RwLock<Vec<DeviceRecord>>,
}

impl InMemoryDeviceStore {
    /// 创建新的设备存储
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryDeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DeviceStore for InMemoryDeviceStore {
    /// 列出设备（过滤 → skip → limit）
    async fn list_devices(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let items = self
            .devices
            .read()
            .map(|list| {
                list.iter()
                    .filter(|item| match keyword {
                        Some(kw) => item.vendor.as_deref().is_some_and(|v| v.contains(kw)),
                        None => true,
                    })
                    .skip(skip as usize)
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    /// 查找指定设备
    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        let item = self
            .devices
            .read()
            .ok()
            .and_then(|list| list.iter().find(|item| item.device_id == device_id).cloned());
        Ok(item)
    }

    /// 创建新设备
    async fn create_device(&self, record: DeviceRecord) -> Result<DeviceRecord, StorageError> {
        let mut list = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if list.iter().any(|item| item.device_id == record.device_id) {
            return Err(StorageError::new("device exists"));
        }
        list.push(record.clone());
        Ok(record)
    }

    /// 更新设备
    async fn update_device(
        &self,
        device_id: &str,
        update: DeviceUpdate,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let mut list = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let device = match list.iter_mut().find(|item| item.device_id == device_id) {
            Some(device) => device,
            None => return Ok(None),
        };
        if let Some(uid) = update.uid {
            device.uid = uid;
        }
        if let Some(vendor) = update.vendor {
            device.vendor = Some(vendor);
        }
        if let Some(status) = update.status {
            device.status = status;
        }
        if let Some(gateway_id) = update.gateway_id {
            device.gateway_id = gateway_id;
        }
        Ok(Some(device.clone()))
    }

    /// 删除设备，返回删除前的记录
    async fn delete_device(
        &self,
        device_id: &str,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let mut list = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        match list.iter().position(|item| item.device_id == device_id) {
            Some(index) => Ok(Some(list.remove(index))),
            None => Ok(None),
        }
    }

    /// 清空设备表
    async fn delete_all_devices(&self) -> Result<u64, StorageError> {
        let mut list = self
            .devices
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let removed = list.len() as u64;
        list.clear();
        Ok(removed)
    }
}
