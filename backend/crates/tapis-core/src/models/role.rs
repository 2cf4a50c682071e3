use crate::RoleType;

use serde::{Deserialize, Serialize};

/// A role as stored in the role table, identified by its slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identifier (e.g., "global:owner", "project:personalOwner")
    pub slug: String,
    pub display_name: String,
    pub role_type: RoleType,
    /// Feature scopes granted by the role
    pub scopes: Vec<String>,
}
