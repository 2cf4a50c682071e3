use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_message() {
    let response = ApiError::unauthorized("Wrong Tapis Username or Password.").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Wrong Tapis Username or Password.");
    assert!(json["error"].get("errorCode").is_none());
}

#[tokio::test]
async fn test_mfa_required_returns_401_with_error_code_998() {
    let error = ApiError::MfaRequired {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "MFA Error");
    assert_eq!(json["error"]["errorCode"], 998);
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "password is required".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_too_many_requests_returns_429() {
    let error = ApiError::TooManyRequests {
        message: "slow down".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::internal("Failed to issue session").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}
