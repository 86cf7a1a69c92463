//! 内存存储实现模块
//!
//! 仅用于本地演示和测试。
//!
//! 包含以下实现：
//! - GatewayStore: InMemoryGatewayStore
//! - DeviceStore: InMemoryDeviceStore
//! - UserStore: InMemoryUserStore
//!
//! 所有实现以 `RwLock<Vec<_>>` 保存记录，保持插入顺序，
//! 使偏移分页的结果与 Postgres 实现（按 seq 排序）一致。

pub mod device;
pub mod gateway;
pub mod user;

pub use device::*;
pub use gateway::*;
pub use user::*;
