use tapis_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}.{column}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Domain error: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn invalid_row(
        table: &'static str,
        column: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRow {
            table,
            column,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the failure was a UNIQUE violation (e.g. a concurrent
    /// insert of the same email)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = source
            && db_error.is_unique_violation()
        {
            return Self::Conflict {
                message: db_error.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
