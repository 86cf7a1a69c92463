use std::sync::Arc;

use fleet_registry::{GatewayService, NewGateway, RegistryError};
use fleet_storage::{GatewayStore, GatewayUpdate, InMemoryGatewayStore};

fn new_gateway(name: &str) -> NewGateway {
    NewGateway {
        serial: "123_456_789".to_string(),
        name: name.to_string(),
        ip4address: "192.168.0.1".to_string(),
    }
}

fn service() -> (GatewayService, Arc<InMemoryGatewayStore>) {
    let store = Arc::new(InMemoryGatewayStore::new());
    (GatewayService::new(store.clone()), store)
}

#[tokio::test]
async fn save_then_find_round_trip() {
    let (service, _) = service();

    let created = service.save(new_gateway("gateway 1")).await.expect("save");
    assert!(!created.gateway_id.is_empty());

    let found = service.find_by_id(&created.gateway_id).await.expect("find");
    assert_eq!(found.name, "gateway 1");
    assert_eq!(found.serial, "123_456_789");
    assert_eq!(found.ip4address, "192.168.0.1");
}

#[tokio::test]
async fn save_mints_distinct_ids() {
    let (service, _) = service();

    let first = service.save(new_gateway("gateway 1")).await.expect("save");
    let second = service.save(new_gateway("gateway 1")).await.expect("save");
    assert_ne!(first.gateway_id, second.gateway_id);
}

#[tokio::test]
async fn find_by_id_raises_not_found() {
    let (service, _) = service();

    let result = service.find_by_id("no-such-id").await;
    assert!(matches!(
        result,
        Err(RegistryError::NotFound { resource: "gateway", .. })
    ));
}

#[tokio::test]
async fn update_absent_id_leaves_no_phantom() {
    let (service, store) = service();

    let update = GatewayUpdate {
        serial: None,
        name: Some("ghost".to_string()),
        ip4address: None,
    };
    let result = service.update("no-such-id", update).await;
    assert!(matches!(result, Err(RegistryError::NotFound { .. })));

    // 更新失败不得产生任何新记录
    let all = store.list_gateways(None, 0, 100).await.expect("list");
    assert!(all.is_empty());
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let (service, _) = service();
    let created = service.save(new_gateway("gateway 1")).await.expect("save");

    let updated = service
        .update(
            &created.gateway_id,
            GatewayUpdate {
                serial: None,
                name: Some("renamed".to_string()),
                ip4address: None,
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.gateway_id, created.gateway_id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.serial, created.serial);
    assert_eq!(updated.ip4address, created.ip4address);
}

#[tokio::test]
async fn delete_twice_raises_not_found() {
    let (service, _) = service();
    let created = service.save(new_gateway("gateway 1")).await.expect("save");

    let removed = service
        .delete_by_id(&created.gateway_id)
        .await
        .expect("delete");
    assert_eq!(removed.gateway_id, created.gateway_id);
    assert_eq!(removed.name, "gateway 1");

    let again = service.delete_by_id(&created.gateway_id).await;
    assert!(matches!(again, Err(RegistryError::NotFound { .. })));
}

#[tokio::test]
async fn find_all_applies_default_pagination() {
    let (service, _) = service();
    for index in 0..12 {
        service
            .save(new_gateway(&format!("gateway {index}")))
            .await
            .expect("save");
    }

    // 默认 limit=10
    let page = service.find_all(None, None, None).await.expect("list");
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "gateway 0");

    let page = service.find_all(None, Some(10), None).await.expect("list");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "gateway 10");
}

#[tokio::test]
async fn find_all_filters_by_name_substring() {
    let (service, _) = service();
    service.save(new_gateway("gateway 1")).await.expect("save");
    service.save(new_gateway("gateway 2")).await.expect("save");
    service.save(new_gateway("edge node")).await.expect("save");

    let matches = service
        .find_all(Some("gateway"), None, None)
        .await
        .expect("list");
    assert_eq!(matches.len(), 2);

    // 空关键字等价于无过滤
    let all = service.find_all(Some(""), None, None).await.expect("list");
    assert_eq!(all.len(), 3);

    let none = service
        .find_all(Some("missing"), None, None)
        .await
        .expect("list");
    assert!(none.is_empty());
}

#[tokio::test]
async fn delete_all_clears_store() {
    let (service, _) = service();
    service.save(new_gateway("gateway 1")).await.expect("save");
    service.save(new_gateway("gateway 2")).await.expect("save");

    assert_eq!(service.delete_all().await.expect("clear"), 2);
    assert!(service.find_all(None, None, None).await.expect("list").is_empty());
}
