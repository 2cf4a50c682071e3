#![allow(dead_code)]

//! Test infrastructure for tapis-server API tests

use tapis_config::Config;
use tapis_db::ConnectionManager;
use tapis_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-bytes!";

pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool")
}

/// Tapis stand-in answering every token request with `status`
pub async fn start_tapis(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/oauth2/tokens"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "status": status })))
        .mount(&server)
        .await;
    server
}

pub fn test_config(tapis_uri: &str) -> Config {
    let mut config = Config::default();
    config.tapis.base_url = tapis_uri.to_string();
    config.tapis.request_timeout_secs = 5;
    config.provisioning.reload_attempts = 3;
    config.provisioning.reload_delay_ms = 10;
    config.session.jwt_secret = Some(TEST_JWT_SECRET.to_string());
    config
}

pub async fn create_test_app_state(config: &Config) -> AppState {
    let pool = create_test_pool().await;
    AppState::from_config(pool, config).expect("Failed to build app state")
}

pub fn login_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/rest/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// `name=value` part of the response's Set-Cookie header
pub fn session_cookie_pair(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}
