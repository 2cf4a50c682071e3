//! Rules that map a Tapis account onto local records.
//!
//! A Tapis username is the only identity the provider hands back, so every
//! local attribute (email, display name, personal project name) is derived
//! from it deterministically. The email is the uniqueness key: one Tapis
//! username can never own more than one local user.

/// Institutional domain appended to Tapis usernames to form local emails.
pub const TAPIS_EMAIL_DOMAIN: &str = "tacc.utexas.edu";

/// Marker stored as the last name of every provisioned user.
pub const TAPIS_LAST_NAME: &str = "(Tapis)";

/// Global role tried first when provisioning a user.
pub const PREFERRED_ROLE_SLUG: &str = "global:owner";

/// Global role tried when the preferred one does not exist.
pub const FALLBACK_ROLE_SLUG: &str = "admin";

/// Membership role linking a user to their personal project.
pub const PERSONAL_OWNER_ROLE: &str = "project:personalOwner";

/// A Tapis username together with the local email derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapisIdentity {
    username: String,
    email: String,
}

impl TapisIdentity {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: format!("{}@{}", username, TAPIS_EMAIL_DOMAIN),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name of the personal project, in the `First Last <email>` shape the
    /// workflow UI expects for personal projects.
    pub fn personal_project_name(&self) -> String {
        format!("{} {} <{}>", self.username, TAPIS_LAST_NAME, self.email)
    }
}
