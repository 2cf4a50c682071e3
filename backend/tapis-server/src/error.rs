use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tapis_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] tapis_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] tapis_db::DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
