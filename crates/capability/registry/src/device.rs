//! 设备注册服务。

use crate::{RegistryError, normalize_query};
use domain::DeviceStatus;
use fleet_storage::{DeviceRecord, DeviceStore, DeviceUpdate};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const RESOURCE: &str = "device";

/// 设备创建输入（已通过请求体校验）。
///
/// `gateway_id` 是弱引用：不校验网关是否存在，删除网关也不影响设备。
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub uid: String,
    pub vendor: Option<String>,
    pub status: DeviceStatus,
    pub gateway_id: String,
}

/// 设备业务服务。
///
/// 无状态，可在多请求间共享；所有状态都在底层存储中。
pub struct DeviceService {
    store: Arc<dyn DeviceStore>,
}

impl DeviceService {
    /// 创建设备服务实例。
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store }
    }

    /// 列出设备：可选关键字（vendor 子串）过滤 + 偏移分页。
    pub async fn find_all(
        &self,
        keyword: Option<&str>,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<DeviceRecord>, RegistryError> {
        let (keyword, skip, limit) = normalize_query(keyword, skip, limit);
        Ok(self.store.list_devices(keyword, skip, limit).await?)
    }

    /// 按 id 查找设备；不存在即 NotFound。
    pub async fn find_by_id(&self, device_id: &str) -> Result<DeviceRecord, RegistryError> {
        self.store
            .find_device(device_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, device_id))
    }

    /// 创建设备，铸造新 id 与创建时间戳，返回完整记录。
    pub async fn save(&self, new: NewDevice) -> Result<DeviceRecord, RegistryError> {
        let record = DeviceRecord {
            device_id: Uuid::new_v4().to_string(),
            uid: new.uid,
            vendor: new.vendor,
            status: new.status,
            gateway_id: new.gateway_id,
            created_at_ms: now_epoch_ms(),
        };
        Ok(self.store.create_device(record).await?)
    }

    /// 合并更新设备，返回更新后的记录；不存在即 NotFound，无部分副作用。
    pub async fn update(
        &self,
        device_id: &str,
        update: DeviceUpdate,
    ) -> Result<DeviceRecord, RegistryError> {
        self.store
            .update_device(device_id, update)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, device_id))
    }

    /// 删除设备，返回删除前的记录；不存在即 NotFound。
    pub async fn delete_by_id(&self, device_id: &str) -> Result<DeviceRecord, RegistryError> {
        self.store
            .delete_device(device_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, device_id))
    }

    /// 清空设备表（测试用），返回删除条数。
    pub async fn delete_all(&self) -> Result<u64, RegistryError> {
        Ok(self.store.delete_all_devices().await?)
    }
}

/// 当前时间戳（毫秒）。
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
