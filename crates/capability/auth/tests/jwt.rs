use domain::{AuthContext, Role};
use fleet_auth::{AuthError, JwtManager};
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Serialize)]
struct RawClaims {
    sub: String,
    username: String,
    roles: Vec<String>,
    exp: usize,
}

fn encode_with_exp(secret: &str, exp: usize) -> String {
    let claims = RawClaims {
        sub: "user-1".to_string(),
        username: "amr".to_string(),
        roles: vec!["USER".to_string()],
        exp,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode")
}

fn now_epoch_seconds() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as usize
}

#[test]
fn jwt_issue_and_decode() {
    let jwt = JwtManager::new("secret".to_string(), 3600);
    let ctx = AuthContext::new("user-1", "amr", vec![Role::User, Role::Admin]);

    let token = jwt.issue_access(&ctx).expect("token");
    let decoded = jwt.decode_access(&token).expect("decode");

    assert_eq!(decoded.user_id, "user-1");
    assert_eq!(decoded.username, "amr");
    assert_eq!(decoded.roles, vec![Role::User, Role::Admin]);
}

#[test]
fn expired_token_rejected() {
    let jwt = JwtManager::new("secret".to_string(), 3600);
    // exp 在一小时前，超出默认 leeway
    let token = encode_with_exp("secret", now_epoch_seconds() - 3600);

    let result = jwt.decode_access(&token);
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[test]
fn garbage_token_rejected() {
    let jwt = JwtManager::new("secret".to_string(), 3600);
    let result = jwt.decode_access("not-a-jwt");
    assert!(matches!(result, Err(AuthError::TokenInvalid)));
}

#[test]
fn wrong_secret_rejected() {
    let jwt = JwtManager::new("secret".to_string(), 3600);
    let token = encode_with_exp("other-secret", now_epoch_seconds() + 3600);

    let result = jwt.decode_access(&token);
    assert!(matches!(result, Err(AuthError::TokenInvalid)));
}
