//! 存储接口 Trait 定义
//!
//! 定义所有资源存储的异步接口：
//! - GatewayStore：网关存储
//! - DeviceStore：设备存储
//! - UserStore：用户存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - "不存在"以 `Option` 表达，由上层翻译为领域错误
//! - 列表查询统一接受 keyword / skip / limit（先过滤，再跳过，再截断）
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{
    DeviceRecord, DeviceUpdate, GatewayRecord, GatewayUpdate, UserRecord,
};
use async_trait::async_trait;

/// 网关存储接口
///
/// 提供网关 CRUD 操作。关键字过滤对 `name` 做大小写敏感的子串匹配。
#[async_trait]
pub trait GatewayStore: Send + Sync {
    /// 列出网关（可选关键字过滤 + 偏移分页，按插入顺序返回）
    async fn list_gateways(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<GatewayRecord>, StorageError>;

    /// 查找指定网关
    async fn find_gateway(&self, gateway_id: &str)
    -> Result<Option<GatewayRecord>, StorageError>;

    /// 创建新网关
    async fn create_gateway(&self, record: GatewayRecord)
    -> Result<GatewayRecord, StorageError>;

    /// 更新网关，返回更新后的记录；目标不存在时返回 None
    async fn update_gateway(
        &self,
        gateway_id: &str,
        update: GatewayUpdate,
    ) -> Result<Option<GatewayRecord>, StorageError>;

    /// 删除网关，返回删除前的记录；目标不存在时返回 None
    async fn delete_gateway(
        &self,
        gateway_id: &str,
    ) -> Result<Option<GatewayRecord>, StorageError>;

    /// 清空网关表，返回删除条数（种子数据与测试用）
    async fn delete_all_gateways(&self) -> Result<u64, StorageError>;
}

/// 设备存储接口
///
/// 提供设备 CRUD 操作。关键字过滤对 `vendor` 做大小写敏感的子串匹配；
/// 没有 vendor 的设备不会命中任何关键字。
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// 列出设备（可选关键字过滤 + 偏移分页，按插入顺序返回）
    async fn list_devices(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<DeviceRecord>, StorageError>;

    /// 查找指定设备
    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError>;

    /// 创建新设备
    async fn create_device(&self, record: DeviceRecord) -> Result<DeviceRecord, StorageError>;

    /// 更新设备，返回更新后的记录；目标不存在时返回 None
    async fn update_device(
        &self,
        device_id: &str,
        update: DeviceUpdate,
    ) -> Result<Option<DeviceRecord>, StorageError>;

    /// 删除设备，返回删除前的记录；目标不存在时返回 None
    async fn delete_device(&self, device_id: &str)
    -> Result<Option<DeviceRecord>, StorageError>;

    /// 清空设备表，返回删除条数（测试用）
    async fn delete_all_devices(&self) -> Result<u64, StorageError>;
}

/// 用户存储接口
///
/// 提供注册与登录所需的查找和写入功能。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserRecord>, StorageError>;

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError>;

    /// 创建新用户
    async fn create_user(&self, record: UserRecord) -> Result<UserRecord, StorageError>;

    /// 清空用户表，返回删除条数（种子数据与测试用）
    async fn delete_all_users(&self) -> Result<u64, StorageError>;
}
