use crate::env_source::EnvSource;
use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, ProvisioningConfig, RateLimitConfig, ServerConfig,
    SessionConfig, TapisConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub tapis: TapisConfig,
    pub provisioning: ProvisioningConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. TAPIS_BRIDGE_CONFIG_DIR env var, else ./.tapis-bridge/ (created if missing)
    /// 2. config.toml if it exists, else defaults
    /// 3. The Tapis env file (`tapis.env_file`, default `.env.tapis`) is read
    /// 4. Environment overrides; process variables beat env-file variables
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        if let Ok(env_file) = std::env::var("TAPIS_BRIDGE_ENV_FILE") {
            config.tapis.env_file = env_file;
        }
        let env = EnvSource::with_file(Path::new(&config.tapis.env_file))?;
        config.apply_env_overrides(&env);

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Priority: TAPIS_BRIDGE_CONFIG_DIR env var > ./.tapis-bridge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.tapis.validate()?;
        self.provisioning.validate()?;
        self.session.validate()?;
        self.rate_limit.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// None when logging to stdout
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} ({})",
            self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  tapis: {} + {} (timeout {}s)",
            self.tapis.base_url, self.tapis.auth_endpoint, self.tapis.request_timeout_secs
        );
        info!(
            "  provisioning: reload {}x every {}ms",
            self.provisioning.reload_attempts, self.provisioning.reload_delay_ms
        );
        info!(
            "  session: cookie={}, ttl={}s, secret={}, secure={}",
            self.session.cookie_name,
            self.session.ttl_secs,
            if self.session.jwt_secret.is_some() {
                "configured"
            } else {
                "generated"
            },
            self.session.secure_cookie
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self, env: &EnvSource) {
        // Server
        env.apply_string("TAPIS_BRIDGE_SERVER_HOST", &mut self.server.host);
        env.apply_parse("TAPIS_BRIDGE_SERVER_PORT", &mut self.server.port);

        // Database
        env.apply_string("TAPIS_BRIDGE_DATABASE_PATH", &mut self.database.path);

        // Logging
        env.apply_parse("TAPIS_BRIDGE_LOG_LEVEL", &mut self.logging.level);
        env.apply_option_string("TAPIS_BRIDGE_LOG_FILE", &mut self.logging.file);
        env.apply_bool("TAPIS_BRIDGE_LOG_COLORED", &mut self.logging.colored);

        // Tapis (unprefixed, shared with other Tapis tooling)
        env.apply_string("TAPIS_BASE_URL", &mut self.tapis.base_url);
        env.apply_string("TAPIS_AUTH_ENDPOINT", &mut self.tapis.auth_endpoint);
        env.apply_parse(
            "TAPIS_BRIDGE_REQUEST_TIMEOUT_SECS",
            &mut self.tapis.request_timeout_secs,
        );

        // Provisioning
        env.apply_parse(
            "TAPIS_BRIDGE_RELOAD_ATTEMPTS",
            &mut self.provisioning.reload_attempts,
        );
        env.apply_parse(
            "TAPIS_BRIDGE_RELOAD_DELAY_MS",
            &mut self.provisioning.reload_delay_ms,
        );

        // Session
        env.apply_option_string("TAPIS_BRIDGE_JWT_SECRET", &mut self.session.jwt_secret);
        env.apply_parse("TAPIS_BRIDGE_SESSION_TTL_SECS", &mut self.session.ttl_secs);
        env.apply_bool("TAPIS_BRIDGE_SECURE_COOKIE", &mut self.session.secure_cookie);

        // Rate limit
        env.apply_parse(
            "TAPIS_BRIDGE_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        env.apply_parse(
            "TAPIS_BRIDGE_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
    }
}
