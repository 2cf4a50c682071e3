//! Password hashing for locally stored credentials.

use crate::{DbError, Result};

use tapis_core::ErrorLocation;

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password into an argon2id PHC string
#[track_caller]
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check a plaintext password against a stored PHC string
#[track_caller]
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| DbError::PasswordHash {
        message: format!("Stored hash is not a PHC string: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}
