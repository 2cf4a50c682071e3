use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PERSONALIZATION_SURVEY_VERSION: &str = "v4";

/// Onboarding survey answers blob. A completed, empty survey keeps the UI
/// from prompting provisioned users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationAnswers {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub answers: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PersonalizationAnswers {
    fn default() -> Self {
        Self {
            version: PERSONALIZATION_SURVEY_VERSION.to_string(),
            completed: true,
            answers: Map::new(),
            extra: Map::new(),
        }
    }
}
