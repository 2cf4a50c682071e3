mod project_type;
mod public_user;
mod role_type;
mod user_settings;
