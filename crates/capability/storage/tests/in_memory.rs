use domain::Role;
use fleet_storage::{InMemoryUserStore, UserRecord, UserStore};

fn user(user_id: &str, username: &str, email: &str) -> UserRecord {
    UserRecord {
        user_id: user_id.to_string(),
        username: username.to_string(),
        password_hash: "hash".to_string(),
        email: email.to_string(),
        first_name: None,
        last_name: None,
        roles: vec![Role::User],
    }
}

#[tokio::test]
async fn create_and_find_user() {
    let store = InMemoryUserStore::new();
    store
        .create_user(user("user-1", "amr", "amr@example.com"))
        .await
        .expect("create");

    let by_username = store
        .find_by_username("amr")
        .await
        .expect("query")
        .expect("user");
    assert_eq!(by_username.user_id, "user-1");

    let by_email = store
        .find_by_email("amr@example.com")
        .await
        .expect("query")
        .expect("user");
    assert_eq!(by_email.username, "amr");

    assert!(store.find_by_username("nobody").await.expect("query").is_none());
    assert!(
        store
            .find_by_email("nobody@example.com")
            .await
            .expect("query")
            .is_none()
    );
}

#[tokio::test]
async fn duplicate_user_rejected() {
    let store = InMemoryUserStore::new();
    store
        .create_user(user("user-1", "amr", "amr@example.com"))
        .await
        .expect("create");

    let same_username = store
        .create_user(user("user-2", "amr", "other@example.com"))
        .await;
    assert!(same_username.is_err());

    let same_email = store
        .create_user(user("user-3", "other", "amr@example.com"))
        .await;
    assert!(same_email.is_err());
}

#[tokio::test]
async fn delete_all_users_counts() {
    let store = InMemoryUserStore::new();
    store
        .create_user(user("user-1", "amr", "amr@example.com"))
        .await
        .expect("create");
    store
        .create_user(user("user-2", "admin", "admin@example.com"))
        .await
        .expect("create");

    assert_eq!(store.delete_all_users().await.expect("clear"), 2);
    assert!(store.find_by_username("amr").await.expect("query").is_none());
    assert_eq!(store.delete_all_users().await.expect("clear"), 0);
}
