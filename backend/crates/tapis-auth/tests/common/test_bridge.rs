use tapis_auth::{ReloadPolicy, TapisAuthBridge, TapisClient};
use tapis_db::{ProjectRelationRepository, ProjectRepository, RoleRepository, UserRepository};

use std::time::Duration;

use serde_json::json;
use sqlx::SqlitePool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/v3/oauth2/tokens";

/// Starts a Tapis stand-in answering every token request with `status`
pub async fn start_tapis(status: u16) -> MockServer {
    let server = MockServer::start().await;
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "result": { "access_token": { "access_token": "abc", "expires_in": 14400 } }
        }))
    } else {
        ResponseTemplate::new(status).set_body_json(json!({
            "message": "Invalid username/password combination.",
            "status": "error"
        }))
    };

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(template)
        .mount(&server)
        .await;

    server
}

pub fn build_bridge(pool: &SqlitePool, tapis_uri: &str) -> TapisAuthBridge {
    let client = TapisClient::new(tapis_uri, TOKEN_PATH, Some(Duration::from_secs(5)))
        .expect("Failed to build Tapis client");

    TapisAuthBridge::new(
        client,
        UserRepository::new(pool.clone()),
        RoleRepository::new(pool.clone()),
        ProjectRepository::new(pool.clone()),
        ProjectRelationRepository::new(pool.clone()),
        ReloadPolicy::new(3, Duration::from_millis(10)),
    )
}
