use crate::{PersonalizationAnswers, Role, UserSettings};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Local user record with its global role attached when one is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Argon2 PHC string; None for users that never set a password
    pub password_hash: Option<String>,
    pub role_slug: Option<String>,
    pub role: Option<Role>,
    pub active: bool,
    pub settings: Option<UserSettings>,
    pub personalization_answers: Option<PersonalizationAnswers>,
    pub mfa_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A user without a password has been invited but never signed up
    pub fn is_pending(&self) -> bool {
        self.password_hash.is_none()
    }

    /// Scopes granted through the global role
    pub fn global_scopes(&self) -> Vec<String> {
        self.role
            .as_ref()
            .map(|role| role.scopes.clone())
            .unwrap_or_default()
    }
}
