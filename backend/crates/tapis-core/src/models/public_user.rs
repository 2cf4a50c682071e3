use crate::{PersonalizationAnswers, User, UserSettings};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User as returned to clients: never carries the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub is_pending: bool,
    pub settings: Option<UserSettings>,
    pub personalization_answers: Option<PersonalizationAnswers>,
    pub mfa_enabled: bool,
    pub mfa_authenticated: bool,
    pub global_scopes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicUser {
    pub fn from_user(user: &User, mfa_authenticated: bool) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role_slug.clone(),
            is_pending: user.is_pending(),
            settings: user.settings.clone(),
            personalization_answers: user.personalization_answers.clone(),
            mfa_enabled: user.mfa_enabled,
            mfa_authenticated,
            global_scopes: user.global_scopes(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
