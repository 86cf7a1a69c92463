use api_contract::{
    ApiError, CreateDeviceRequest, DeviceDto, GatewayDto, LoginResponse, RegisterRequest,
    UpdateGatewayRequest,
};

#[test]
fn gateway_dto_serializes_camel_case() {
    let dto = GatewayDto {
        id: "gw-1".to_string(),
        serial: "123_456_789".to_string(),
        name: "gateway 1".to_string(),
        ip4address: "192.168.0.1".to_string(),
    };

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["id"], "gw-1");
    assert_eq!(value["serial"], "123_456_789");
    assert_eq!(value["name"], "gateway 1");
    assert_eq!(value["ip4address"], "192.168.0.1");
}

#[test]
fn device_dto_uses_camel_case_for_compound_fields() {
    let dto = DeviceDto {
        id: "dev-1".to_string(),
        uid: "a1b2".to_string(),
        vendor: None,
        status: "ONLINE".to_string(),
        gateway_id: "gw-1".to_string(),
        created_at: 1_700_000_000_000,
    };

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["gatewayId"], "gw-1");
    assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
    assert!(value["vendor"].is_null());
    assert!(value.get("gateway_id").is_none());
}

#[test]
fn create_device_request_reads_camel_case_body() {
    let body = r#"{"uid":"a1b2","status":"OFFLINE","gatewayId":"gw-1"}"#;
    let request: CreateDeviceRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.uid, "a1b2");
    assert_eq!(request.status, "OFFLINE");
    assert_eq!(request.gateway_id, "gw-1");
    assert!(request.vendor.is_none());
}

#[test]
fn update_gateway_request_allows_partial_body() {
    let request: UpdateGatewayRequest = serde_json::from_str(r#"{"name":"renamed"}"#).unwrap();

    assert_eq!(request.name.as_deref(), Some("renamed"));
    assert!(request.serial.is_none());
    assert!(request.ip4address.is_none());
}

#[test]
fn register_request_accepts_optional_names() {
    let body = r#"{"username":"amr","password":"password","email":"amr@example.com"}"#;
    let request: RegisterRequest = serde_json::from_str(body).unwrap();

    assert!(request.first_name.is_none());
    assert!(request.last_name.is_none());

    let body = r#"{"username":"amr","password":"password","email":"amr@example.com","firstName":"Amr","lastName":"S"}"#;
    let request: RegisterRequest = serde_json::from_str(body).unwrap();
    assert_eq!(request.first_name.as_deref(), Some("Amr"));
}

#[test]
fn login_response_keeps_snake_case_token_field() {
    let response = LoginResponse {
        access_token: "token".to_string(),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["access_token"], "token");
    assert!(value.get("accessToken").is_none());
}

#[test]
fn api_error_carries_code_and_message() {
    let error = ApiError::new("RESOURCE.NOT_FOUND", "gateway not found");
    let value = serde_json::to_value(&error).unwrap();

    assert_eq!(value["code"], "RESOURCE.NOT_FOUND");
    assert_eq!(value["message"], "gateway not found");
}
