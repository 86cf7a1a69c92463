use domain::DeviceStatus;
use fleet_storage::{
    DeviceRecord, DeviceStore, DeviceUpdate, GatewayRecord, GatewayStore, GatewayUpdate,
    InMemoryDeviceStore, InMemoryGatewayStore,
};

fn gateway(gateway_id: &str, name: &str) -> GatewayRecord {
    GatewayRecord {
        gateway_id: gateway_id.to_string(),
        serial: "123_456_789".to_string(),
        name: name.to_string(),
        ip4address: "192.168.0.1".to_string(),
    }
}

fn device(device_id: &str, vendor: Option<&str>) -> DeviceRecord {
    DeviceRecord {
        device_id: device_id.to_string(),
        uid: format!("uid-{device_id}"),
        vendor: vendor.map(str::to_string),
        status: DeviceStatus::Online,
        gateway_id: "gw-1".to_string(),
        created_at_ms: 1_700_000_000_000,
    }
}

#[tokio::test]
async fn gateway_in_memory_crud() {
    let store = InMemoryGatewayStore::new();
    let created = store
        .create_gateway(gateway("gw-1", "gateway 1"))
        .await
        .expect("create");
    assert_eq!(created.gateway_id, "gw-1");

    let list = store.list_gateways(None, 0, 10).await.expect("list");
    assert_eq!(list.len(), 1);

    let got = store.find_gateway("gw-1").await.expect("find");
    assert!(got.is_some());
    assert!(store.find_gateway("gw-2").await.expect("find").is_none());
}

#[tokio::test]
async fn gateway_update_merges_fields() {
    let store = InMemoryGatewayStore::new();
    store
        .create_gateway(gateway("gw-1", "gateway 1"))
        .await
        .expect("create");

    let updated = store
        .update_gateway(
            "gw-1",
            GatewayUpdate {
                serial: None,
                name: Some("renamed".to_string()),
                ip4address: None,
            },
        )
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.serial, "123_456_789");
    assert_eq!(updated.ip4address, "192.168.0.1");

    let absent = store
        .update_gateway(
            "gw-9",
            GatewayUpdate {
                serial: None,
                name: Some("ghost".to_string()),
                ip4address: None,
            },
        )
        .await
        .expect("update");
    assert!(absent.is_none());
}

#[tokio::test]
async fn gateway_delete_returns_prior_record() {
    let store = InMemoryGatewayStore::new();
    store
        .create_gateway(gateway("gw-1", "gateway 1"))
        .await
        .expect("create");

    let removed = store
        .delete_gateway("gw-1")
        .await
        .expect("delete")
        .expect("present");
    assert_eq!(removed.name, "gateway 1");

    // 第二次删除同一 id：目标已不存在
    assert!(store.delete_gateway("gw-1").await.expect("delete").is_none());
    assert!(store.find_gateway("gw-1").await.expect("find").is_none());
}

#[tokio::test]
async fn device_in_memory_crud() {
    let store = InMemoryDeviceStore::new();
    let created = store
        .create_device(device("dev-1", Some("vendor-a")))
        .await
        .expect("create");
    assert_eq!(created.device_id, "dev-1");

    let list = store.list_devices(None, 0, 10).await.expect("list");
    assert_eq!(list.len(), 1);

    let got = store
        .find_device("dev-1")
        .await
        .expect("find")
        .expect("device");
    assert_eq!(got.status, DeviceStatus::Online);
}

#[tokio::test]
async fn device_update_keeps_created_at() {
    let store = InMemoryDeviceStore::new();
    store
        .create_device(device("dev-1", Some("vendor-a")))
        .await
        .expect("create");

    let updated = store
        .update_device(
            "dev-1",
            DeviceUpdate {
                uid: None,
                vendor: Some("vendor-b".to_string()),
                status: Some(DeviceStatus::Offline),
                gateway_id: None,
            },
        )
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.vendor.as_deref(), Some("vendor-b"));
    assert_eq!(updated.status, DeviceStatus::Offline);
    assert_eq!(updated.created_at_ms, 1_700_000_000_000);
    assert_eq!(updated.gateway_id, "gw-1");
}

#[tokio::test]
async fn device_delete_and_clear() {
    let store = InMemoryDeviceStore::new();
    store
        .create_device(device("dev-1", None))
        .await
        .expect("create");
    store
        .create_device(device("dev-2", None))
        .await
        .expect("create");

    let removed = store
        .delete_device("dev-1")
        .await
        .expect("delete")
        .expect("present");
    assert_eq!(removed.device_id, "dev-1");

    assert_eq!(store.delete_all_devices().await.expect("clear"), 1);
    assert!(store.list_devices(None, 0, 10).await.expect("list").is_empty());
}
