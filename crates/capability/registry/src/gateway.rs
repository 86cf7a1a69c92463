//! 网关注册服务。

use crate::{RegistryError, normalize_query};
use fleet_storage::{GatewayRecord, GatewayStore, GatewayUpdate};
use std::sync::Arc;
use uuid::Uuid;

const RESOURCE: &str = "gateway";

/// 网关创建输入（已通过请求体校验）。
#[derive(Debug, Clone)]
pub struct NewGateway {
    pub serial: String,
    pub name: String,
    pub ip4address: String,
}

/// 网关业务服务。
///
/// 无状态，可在多请求间共享；所有状态都在底层存储中。
pub struct GatewayService {
    store: Arc<dyn GatewayStore>,
}

impl GatewayService {
    /// 创建网关服务实例。
    pub fn new(store: Arc<dyn GatewayStore>) -> Self {
        Self { store }
    }

    /// 列出网关：可选关键字（name 子串）过滤 + 偏移分页。
    ///
    /// 空结果是正常返回，不是错误。
    pub async fn find_all(
        &self,
        keyword: Option<&str>,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<GatewayRecord>, RegistryError> {
        let (keyword, skip, limit) = normalize_query(keyword, skip, limit);
        Ok(self.store.list_gateways(keyword, skip, limit).await?)
    }

    /// 按 id 查找网关；不存在即 NotFound。
    pub async fn find_by_id(&self, gateway_id: &str) -> Result<GatewayRecord, RegistryError> {
        self.store
            .find_gateway(gateway_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, gateway_id))
    }

    /// 创建网关，铸造新 id 并返回完整记录。
    pub async fn save(&self, new: NewGateway) -> Result<GatewayRecord, RegistryError> {
        let record = GatewayRecord {
            gateway_id: Uuid::new_v4().to_string(),
            serial: new.serial,
            name: new.name,
            ip4address: new.ip4address,
        };
        Ok(self.store.create_gateway(record).await?)
    }

    /// 合并更新网关，返回更新后的记录；不存在即 NotFound，无部分副作用。
    pub async fn update(
        &self,
        gateway_id: &str,
        update: GatewayUpdate,
    ) -> Result<GatewayRecord, RegistryError> {
        self.store
            .update_gateway(gateway_id, update)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, gateway_id))
    }

    /// 删除网关，返回删除前的记录；不存在即 NotFound（故删除不幂等）。
    pub async fn delete_by_id(&self, gateway_id: &str) -> Result<GatewayRecord, RegistryError> {
        self.store
            .delete_gateway(gateway_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(RESOURCE, gateway_id))
    }

    /// 清空网关表（种子数据与测试用），返回删除条数。
    pub async fn delete_all(&self) -> Result<u64, RegistryError> {
        Ok(self.store.delete_all_gateways().await?)
    }
}
