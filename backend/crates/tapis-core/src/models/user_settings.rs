use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-user UI settings blob.
///
/// Only the keys the workflow UI reads on first load are typed; anything else
/// the UI stores later is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub user_activated: bool,
    #[serde(default)]
    pub dashboard: Map<String, Value>,
    #[serde(default)]
    pub workspaces: WorkspaceSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_workspace_id: Option<String>,
}

impl Default for UserSettings {
    /// Settings of a provisioned user: activated, nothing else chosen yet
    fn default() -> Self {
        Self {
            user_activated: true,
            dashboard: Map::new(),
            workspaces: WorkspaceSettings::default(),
            extra: Map::new(),
        }
    }
}
