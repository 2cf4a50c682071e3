use crate::{LoginEvents, SessionCookie};
use crate::error::Result as ServerErrorResult;

use tapis_auth::{
    DisabledMfa, LoginRateLimiter, MfaValidator, RateLimitConfig, ReloadPolicy, SessionSigner,
    TapisAuthBridge, TapisClient,
};
use tapis_config::Config;
use tapis_db::{ProjectRelationRepository, ProjectRepository, RoleRepository, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use metrics_exporter_prometheus::PrometheusHandle;
use rand::Rng;
use sqlx::SqlitePool;

const GENERATED_SECRET_BYTES: usize = 64;

/// Everything the handlers share
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub bridge: Arc<TapisAuthBridge>,
    pub sessions: Arc<SessionSigner>,
    pub session_cookie: SessionCookie,
    pub mfa: Arc<dyn MfaValidator>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub events: LoginEvents,
    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Wire the bridge, session signer and login throttle from configuration.
    /// MFA starts out disabled and metrics unexported.
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let client = TapisClient::new(
            &config.tapis.base_url,
            &config.tapis.auth_endpoint,
            config.tapis.request_timeout(),
        )?;
        info!("Tapis token endpoint: {}", client.token_url());

        let bridge = TapisAuthBridge::new(
            client,
            UserRepository::new(pool.clone()),
            RoleRepository::new(pool.clone()),
            ProjectRepository::new(pool.clone()),
            ProjectRelationRepository::new(pool.clone()),
            ReloadPolicy::new(
                config.provisioning.reload_attempts,
                Duration::from_millis(config.provisioning.reload_delay_ms),
            ),
        );

        let sessions = SessionSigner::with_hs256(
            &session_secret(config.session.jwt_secret.as_deref()),
            Duration::from_secs(config.session.ttl_secs),
        );

        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            pool,
            bridge: Arc::new(bridge),
            sessions: Arc::new(sessions),
            session_cookie: SessionCookie::from_config(&config.session),
            mfa: Arc::new(DisabledMfa),
            login_limiter: Arc::new(login_limiter),
            events: LoginEvents::new(),
            metrics: None,
        })
    }

    pub fn with_mfa(mut self, mfa: Arc<dyn MfaValidator>) -> Self {
        self.mfa = mfa;
        self
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

fn session_secret(configured: Option<&str>) -> Vec<u8> {
    if let Some(secret) = configured {
        return secret.as_bytes().to_vec();
    }

    warn!("No session.jwt_secret configured; generated a random one, sessions will not survive a restart");
    let mut secret = vec![0u8; GENERATED_SECRET_BYTES];
    rand::rng().fill(secret.as_mut_slice());
    secret
}
