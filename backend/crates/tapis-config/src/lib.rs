mod config;
mod database_config;
mod env_source;
mod error;
mod log_level;
mod logging_config;
mod provisioning_config;
mod rate_limit_config;
mod server_config;
mod session_config;
mod tapis_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provisioning_config::ProvisioningConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use tapis_config::TapisConfig;

pub const CONFIG_DIR_ENV: &str = "TAPIS_BRIDGE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".tapis-bridge";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5678;

const DEFAULT_DATABASE_FILENAME: &str = "tapis-bridge.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_TAPIS_BASE_URL: &str = "https://portals.tapis.io";
const DEFAULT_TAPIS_AUTH_ENDPOINT: &str = "/v3/oauth2/tokens";
const DEFAULT_TAPIS_ENV_FILE: &str = ".env.tapis";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_RELOAD_ATTEMPTS: u32 = 5;
const MIN_RELOAD_ATTEMPTS: u32 = 1;
const MAX_RELOAD_ATTEMPTS: u32 = 50;
const DEFAULT_RELOAD_DELAY_MS: u64 = 50;
const MAX_RELOAD_DELAY_MS: u64 = 5000;

const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MIN_SESSION_TTL_SECS: u64 = 60;
const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_COOKIE_NAME: &str = "tapis-bridge-auth";

const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 10;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
