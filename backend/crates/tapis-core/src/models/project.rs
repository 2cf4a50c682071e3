//! Project entity - the workspace a user's workflows live in.

use crate::ProjectType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub project_type: ProjectType,
    /// User that created the project; None once that user is gone
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create the personal project of a freshly provisioned user
    pub fn personal(name: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            project_type: ProjectType::Personal,
            creator_id: Some(creator_id),
            created_at: now,
            updated_at: now,
        }
    }
}
