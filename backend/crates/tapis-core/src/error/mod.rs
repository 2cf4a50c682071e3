use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role type: {value} {location}")]
    InvalidRoleType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid project type: {value} {location}")]
    InvalidProjectType {
        value: String,
        location: ErrorLocation,
    },

    #[error("JSON error in {field}: {source} {location}")]
    Json {
        field: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
