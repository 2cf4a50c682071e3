use tapis_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Tapis rejected the credentials (HTTP {status}) {location}")]
    IdentityRejected { status: u16, location: ErrorLocation },

    #[error("Tapis request failed: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Invalid Tapis endpoint configuration: {message} {location}")]
    InvalidEndpoint {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provisioning failed: {source} {location}")]
    Provisioning {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("User {user_id} not readable after {attempts} attempts {location}")]
    NotVisible {
        user_id: String,
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("MFA validation failed: {message} {location}")]
    Mfa {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Short tag used in logs and metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IdentityRejected { .. } => "identity_rejected",
            Self::Transport { .. } => "transport",
            Self::InvalidEndpoint { .. } => "invalid_endpoint",
            Self::Provisioning { .. } => "provisioning",
            Self::NotVisible { .. } => "not_visible",
            Self::TokenExpired { .. } => "token_expired",
            Self::JwtDecode { .. } => "jwt_decode",
            Self::JwtEncode { .. } => "jwt_encode",
            Self::InvalidClaim { .. } => "invalid_claim",
            Self::RateLimitExceeded { .. } => "rate_limited",
            Self::Mfa { .. } => "mfa",
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Provisioning {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
