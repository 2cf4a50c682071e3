pub mod error;
pub mod identity;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use identity::{
    FALLBACK_ROLE_SLUG, PERSONAL_OWNER_ROLE, PREFERRED_ROLE_SLUG, TAPIS_EMAIL_DOMAIN,
    TAPIS_LAST_NAME, TapisIdentity,
};
pub use models::new_user::NewUser;
pub use models::personalization_answers::PersonalizationAnswers;
pub use models::project::Project;
pub use models::project_relation::ProjectRelation;
pub use models::project_type::ProjectType;
pub use models::public_user::PublicUser;
pub use models::role::Role;
pub use models::role_type::RoleType;
pub use models::user::User;
pub use models::user_settings::{UserSettings, WorkspaceSettings};
