//! 演示数据初始化
//!
//! 由 `FLEET_SEED_DEMO_DATA` 开关控制（默认关闭），在服务启动、
//! 开始监听之前运行一次：先清空再重建演示数据。任何一步失败都会
//! 让启动终止，不会带着半初始化的数据对外服务。
//!
//! 种子内容：
//! - 网关：gateway 1..3（serial `123_456_789`，ip `192.168.0.1`）
//! - 用户：amr（USER）与 admin（ADMIN），口令均为 `password`
//!
//! 设备没有种子数据。

use crate::AppState;
use domain::Role;
use fleet_auth::hash_password;
use fleet_registry::NewGateway;
use fleet_storage::UserRecord;
use uuid::Uuid;

/// 清空并重建全部演示数据。
pub async fn run(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    seed_gateways(state).await?;
    seed_users(state).await?;
    Ok(())
}

async fn seed_gateways(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let removed = state.gateways.delete_all().await?;
    let fixtures = [
        ("123_456_789", "gateway 1", "192.168.0.1"),
        ("123_456_789", "gateway 2", "192.168.0.1"),
        ("123_456_789", "gateway 3", "192.168.0.1"),
    ];
    for (serial, name, ip4address) in fixtures {
        state
            .gateways
            .save(NewGateway {
                serial: serial.to_string(),
                name: name.to_string(),
                ip4address: ip4address.to_string(),
            })
            .await?;
    }
    tracing::info!(removed, seeded = fixtures.len(), "demo gateways ready");
    Ok(())
}

async fn seed_users(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let removed = state.users.delete_all_users().await?;
    let fixtures = [
        ("amr", "amr@example.com", Role::User),
        ("admin", "admin@example.com", Role::Admin),
    ];
    for (username, email, role) in fixtures {
        let record = UserRecord {
            user_id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password_hash: hash_password("password")?,
            email: email.to_string(),
            first_name: None,
            last_name: None,
            roles: vec![role],
        };
        state.users.create_user(record).await?;
    }
    tracing::info!(removed, seeded = fixtures.len(), "demo users ready");
    Ok(())
}
