pub mod new_user;
pub mod personalization_answers;
pub mod project;
pub mod project_relation;
pub mod project_type;
pub mod public_user;
pub mod role;
pub mod role_type;
pub mod user;
pub mod user_settings;
