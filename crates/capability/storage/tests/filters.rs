use domain::DeviceStatus;
use fleet_storage::{
    DeviceRecord, DeviceStore, GatewayRecord, GatewayStore, InMemoryDeviceStore,
    InMemoryGatewayStore,
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
        status: DeviceStatus::Offline,
        gateway_id: "gw-1".to_string(),
        created_at_ms: 0,
    }
}

async fn seeded_gateways() -> InMemoryGatewayStore {
    let store = InMemoryGatewayStore::new();
    for (id, name) in [
        ("gw-1", "gateway 1"),
        ("gw-2", "gateway 2"),
        ("gw-3", "gateway 3"),
        ("gw-4", "edge node"),
    ] {
        store.create_gateway(gateway(id, name)).await.expect("create");
    }
    store
}

#[tokio::test]
async fn gateway_list_keeps_insertion_order() {
    let store = seeded_gateways().await;
    let list = store.list_gateways(None, 0, 10).await.expect("list");
    let ids: Vec<&str> = list.iter().map(|item| item.gateway_id.as_str()).collect();
    assert_eq!(ids, vec!["gw-1", "gw-2", "gw-3", "gw-4"]);
}

#[tokio::test]
async fn gateway_keyword_matches_name_substring() {
    let store = seeded_gateways().await;

    let list = store
        .list_gateways(Some("gateway"), 0, 10)
        .await
        .expect("list");
    assert_eq!(list.len(), 3);

    let list = store
        .list_gateways(Some("way 2"), 0, 10)
        .await
        .expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].gateway_id, "gw-2");

    // 大小写敏感
    let list = store
        .list_gateways(Some("Gateway"), 0, 10)
        .await
        .expect("list");
    assert!(list.is_empty());
}

#[tokio::test]
async fn gateway_pagination_applies_skip_then_limit() {
    let store = seeded_gateways().await;

    let page = store.list_gateways(None, 1, 2).await.expect("list");
    let ids: Vec<&str> = page.iter().map(|item| item.gateway_id.as_str()).collect();
    assert_eq!(ids, vec!["gw-2", "gw-3"]);

    // skip 在过滤之后生效
    let page = store
        .list_gateways(Some("gateway"), 2, 10)
        .await
        .expect("list");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].gateway_id, "gw-3");

    // skip 超出范围与 limit 为 0 都返回空页
    assert!(store.list_gateways(None, 10, 10).await.expect("list").is_empty());
    assert!(store.list_gateways(None, 0, 0).await.expect("list").is_empty());
}

#[tokio::test]
async fn device_keyword_matches_vendor_only() {
    let store = InMemoryDeviceStore::new();
    store
        .create_device(device("dev-1", Some("acme corp")))
        .await
        .expect("create");
    store
        .create_device(device("dev-2", Some("globex")))
        .await
        .expect("create");
    store
        .create_device(device("dev-3", None))
        .await
        .expect("create");

    let list = store.list_devices(Some("acme"), 0, 10).await.expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].device_id, "dev-1");

    // 无 vendor 的设备不命中任何关键字
    let list = store.list_devices(Some(""), 0, 10).await.expect("list");
    let ids: Vec<&str> = list.iter().map(|item| item.device_id.as_str()).collect();
    assert_eq!(ids, vec!["dev-1", "dev-2"]);

    let list = store.list_devices(None, 0, 10).await.expect("list");
    assert_eq!(list.len(), 3);
}
