use tapis_server::error::Result as ServerErrorResult;
use tapis_server::{AppState, build_router, logger};

use tapis_auth::LoginRateLimiter;
use tapis_db::ConnectionManager;

use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = tapis_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tapis-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = ConnectionManager::file(config.database_path()?)
        .connect()
        .await?;
    info!("Database ready");

    let mut state = AppState::from_config(pool, &config)?;
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!("Prometheus recorder not installed, /metrics disabled: {}", e),
    }

    let _pruner = LoginRateLimiter::spawn_pruner(
        &state.login_limiter,
        Duration::from_secs(config.rate_limit.window_secs),
    );

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
