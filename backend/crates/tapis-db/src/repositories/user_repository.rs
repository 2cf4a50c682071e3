//! User repository.
//!
//! Lookups always join the user's global role so callers get a hydrated
//! `User`. Inserts do not: a freshly inserted user comes back with
//! `role: None` even when `role_slug` is set, and has to be re-read to get
//! the role attached.

use crate::password::hash_password;
use crate::repositories::role_repository::parse_scopes;
use crate::{DbError, Result as DbErrorResult};

use tapis_core::{
    CoreError, ErrorLocation, NewUser, PersonalizationAnswers, Role, RoleType, User, UserSettings,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

const SELECT_USER_WITH_ROLE: &str = r#"
    SELECT u.id, u.email, u.first_name, u.last_name, u.password, u.role_slug,
        u.active, u.settings, u.personalization_answers, u.mfa_enabled,
        u.created_at, u.updated_at,
        r.display_name AS role_display_name,
        r.role_type AS role_type,
        r.scopes AS role_scopes
    FROM users u
    LEFT JOIN roles r ON r.slug = u.role_slug
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
    role_slug: Option<String>,
    active: bool,
    settings: Option<String>,
    personalization_answers: Option<String>,
    mfa_enabled: bool,
    created_at: i64,
    updated_at: i64,
    role_display_name: Option<String>,
    role_type: Option<String>,
    role_scopes: Option<String>,
}

impl UserRow {
    #[track_caller]
    fn into_user(self) -> DbErrorResult<User> {
        let role = match (&self.role_slug, self.role_display_name, self.role_type) {
            (Some(slug), Some(display_name), Some(role_type)) => Some(Role {
                slug: slug.clone(),
                display_name,
                role_type: RoleType::from_str(&role_type)?,
                scopes: parse_scopes(self.role_scopes.as_deref().unwrap_or("[]"))?,
            }),
            _ => None,
        };

        Ok(User {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::invalid_row("users", "id", format!("Invalid UUID: {}", e)))?,
            settings: self
                .settings
                .as_deref()
                .and_then(|raw| decode_blob::<UserSettings>(raw, "settings")),
            personalization_answers: self
                .personalization_answers
                .as_deref()
                .and_then(|raw| decode_blob::<PersonalizationAnswers>(raw, "personalization_answers")),
            created_at: timestamp(self.created_at, "created_at")?,
            updated_at: timestamp(self.updated_at, "updated_at")?,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password,
            role_slug: self.role_slug,
            role,
            active: self.active,
            mfa_enabled: self.mfa_enabled,
        })
    }
}

/// Blobs written by the UI may be `null` or hold a shape we do not type.
/// Such a blob reads as `None` so the user stays loadable.
fn decode_blob<T: DeserializeOwned>(raw: &str, column: &'static str) -> Option<T> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring unreadable users.{} blob: {}", column, e);
            return None;
        }
    };

    if value.is_null() {
        return None;
    }

    serde_json::from_value(value)
        .inspect_err(|e| warn!("Ignoring users.{} blob with unexpected shape: {}", column, e))
        .ok()
}

#[track_caller]
fn encode_blob<T: Serialize>(value: &T, field: &'static str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|source| {
        DbError::from(CoreError::Json {
            field,
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    })
}

#[track_caller]
fn timestamp(secs: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::invalid_row("users", column, "Invalid timestamp"))
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Start a transaction on the user store's pool. Provisioning uses it to
    /// write the user, project and relation atomically.
    pub async fn begin(&self) -> DbErrorResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER_WITH_ROLE} WHERE u.email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER_WITH_ROLE} WHERE u.id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Insert a user in its own transaction
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let mut tx = self.pool.begin().await?;
        let user = self.create_in_tx(&mut tx, new_user).await?;
        tx.commit().await?;

        Ok(user)
    }

    /// Insert a user inside the caller's transaction.
    ///
    /// The plaintext password is hashed here; it never reaches the database.
    /// A second user with the same email fails with `DbError::Conflict`.
    pub async fn create_in_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        new_user: &NewUser,
    ) -> DbErrorResult<User> {
        let password = new_user.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| DbError::PasswordHash {
                message: format!("Hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })??;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email.clone(),
            first_name: Some(new_user.first_name.clone()),
            last_name: Some(new_user.last_name.clone()),
            password_hash: Some(password_hash),
            role_slug: new_user.role_slug.clone(),
            role: None,
            active: new_user.active,
            settings: Some(new_user.settings.clone()),
            personalization_answers: Some(new_user.personalization_answers.clone()),
            mfa_enabled: false,
            created_at: now,
            updated_at: now,
        };

        let settings = encode_blob(&new_user.settings, "settings")?;
        let answers = encode_blob(&new_user.personalization_answers, "personalization_answers")?;

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, first_name, last_name, password, role_slug, active,
                    settings, personalization_answers, mfa_enabled, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(&user.role_slug)
        .bind(user.active)
        .bind(settings)
        .bind(answers)
        .bind(user.mfa_enabled)
        .bind(now.timestamp())
        .bind(now.timestamp())
        .execute(&mut **tx)
        .await?;

        Ok(user)
    }

    /// Turn MFA on or off for a user. Returns false when no such user exists.
    pub async fn set_mfa_enabled(&self, id: Uuid, enabled: bool) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET mfa_enabled = ?, updated_at = ? WHERE id = ?")
            .bind(enabled)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
