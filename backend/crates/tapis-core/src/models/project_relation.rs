use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership of a user in a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRelation {
    pub project_id: Uuid,
    pub user_id: Uuid,
    /// Project role slug (e.g., "project:personalOwner")
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRelation {
    pub fn new(project_id: Uuid, user_id: Uuid, role: &str) -> Self {
        let now = Utc::now();
        Self {
            project_id,
            user_id,
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
