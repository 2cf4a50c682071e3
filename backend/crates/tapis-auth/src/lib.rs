pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod mfa_validator;
pub mod rate_limit_config;
pub mod reload_policy;
pub mod session_signer;
pub mod tapis_auth_bridge;
pub mod tapis_client;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use mfa_validator::{DisabledMfa, MfaValidator};
pub use rate_limit_config::RateLimitConfig;
pub use reload_policy::ReloadPolicy;
pub use session_signer::SessionSigner;
pub use tapis_auth_bridge::TapisAuthBridge;
pub use tapis_client::TapisClient;
