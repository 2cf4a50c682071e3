use crate::{AuthError, Claims, Result as AuthErrorResult};

use tapis_core::User;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and checks HS256 session tokens
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionSigner {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    #[track_caller]
    pub fn issue(
        &self,
        user: &User,
        used_mfa: bool,
        browser_id: Option<&str>,
    ) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: format!("session TTL of {}s overflows the expiry", self.ttl.as_secs()),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            used_mfa,
            browser_id: browser_id.map(str::to_string),
            exp,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
