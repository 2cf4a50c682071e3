//! Typed provisioning request for a local user.

use crate::{PersonalizationAnswers, Role, TAPIS_LAST_NAME, TapisIdentity, UserSettings};

/// Every field the user table needs when a Tapis account is seen for the
/// first time. The password is plaintext here; the persistence layer hashes
/// it before it is written.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role_slug: Option<String>,
    pub active: bool,
    pub settings: UserSettings,
    pub personalization_answers: PersonalizationAnswers,
}

impl NewUser {
    pub fn for_tapis(identity: &TapisIdentity, password: &str, role: Option<&Role>) -> Self {
        Self {
            email: identity.email().to_string(),
            first_name: identity.username().to_string(),
            last_name: TAPIS_LAST_NAME.to_string(),
            password: password.to_string(),
            role_slug: role.map(|r| r.slug.clone()),
            active: true,
            settings: UserSettings::default(),
            personalization_answers: PersonalizationAnswers::default(),
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .field("role_slug", &self.role_slug)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.email,
            self.role_slug.as_deref().unwrap_or("no role")
        )
    }
}
