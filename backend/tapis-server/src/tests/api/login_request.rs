use crate::{ApiError, LoginRequest};

fn request(identifier: &str, password: &str) -> LoginRequest {
    serde_json::from_value(serde_json::json!({
        "emailOrLdapLoginId": identifier,
        "password": password,
    }))
    .unwrap()
}

#[test]
fn test_complete_request_is_valid() {
    assert!(request("jdoe", "secret123").validate().is_ok());
}

#[test]
fn test_blank_identifier_is_rejected_with_field() {
    let result = request("   ", "secret123").validate();

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "emailOrLdapLoginId"
    ));
}

#[test]
fn test_empty_password_is_rejected_with_field() {
    let result = request("jdoe", "").validate();

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "password"
    ));
}

#[test]
fn test_missing_fields_deserialize_as_empty() {
    let request: LoginRequest = serde_json::from_str("{}").unwrap();

    assert!(request.validate().is_err());
    assert!(request.mfa_code().is_none());
}

#[test]
fn test_empty_mfa_codes_count_as_absent() {
    let request: LoginRequest = serde_json::from_value(serde_json::json!({
        "emailOrLdapLoginId": "jdoe",
        "password": "pw",
        "mfaCode": "",
        "mfaRecoveryCode": "ABCD-EFGH",
    }))
    .unwrap();

    assert!(request.mfa_code().is_none());
    assert_eq!(request.recovery_code(), Some("ABCD-EFGH"));
}

#[test]
fn test_debug_output_redacts_password() {
    let rendered = format!("{:?}", request("jdoe", "secret123"));

    assert!(rendered.contains("jdoe"));
    assert!(!rendered.contains("secret123"));
}
