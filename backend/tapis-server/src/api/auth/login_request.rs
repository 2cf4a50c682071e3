use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /rest/login`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Tapis username (the field name is shared with the email/LDAP login form)
    #[serde(default)]
    pub email_or_ldap_login_id: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub mfa_code: Option<String>,
    #[serde(default)]
    pub mfa_recovery_code: Option<String>,
}

impl LoginRequest {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email_or_ldap_login_id.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "emailOrLdapLoginId is required".to_string(),
                field: Some("emailOrLdapLoginId".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation {
                message: "password is required".to_string(),
                field: Some("password".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Non-empty MFA code, if supplied
    pub fn mfa_code(&self) -> Option<&str> {
        self.mfa_code.as_deref().filter(|code| !code.is_empty())
    }

    /// Non-empty recovery code, if supplied
    pub fn recovery_code(&self) -> Option<&str> {
        self.mfa_recovery_code
            .as_deref()
            .filter(|code| !code.is_empty())
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email_or_ldap_login_id", &self.email_or_ldap_login_id)
            .field("password", &"<redacted>")
            .field("mfa_code", &self.mfa_code.as_ref().map(|_| "<redacted>"))
            .field(
                "mfa_recovery_code",
                &self.mfa_recovery_code.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
