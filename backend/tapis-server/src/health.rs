use crate::{ApiError, AppState};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;
use sqlx::SqlitePool;

async fn database_reachable(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Database ping failed: {}", e);
            false
        }
    }
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state.pool).await;

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unreachable" },
            "metrics": if state.metrics.is_some() { "operational" } else { "disabled" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe: can logins reach the database?
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_reachable(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics_export(State(state): State<AppState>) -> Result<Response, ApiError> {
    let handle = state.metrics.as_ref().ok_or_else(|| ApiError::NotAvailable {
        message: "Metrics exporter is not installed".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
        .into_response())
}
