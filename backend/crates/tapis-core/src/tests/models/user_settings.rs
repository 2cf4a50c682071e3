use crate::{PersonalizationAnswers, UserSettings};

use serde_json::json;

#[test]
fn given_default_settings_when_serialized_then_user_is_activated() {
    let value = serde_json::to_value(UserSettings::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "userActivated": true,
            "dashboard": {},
            "workspaces": {}
        })
    );
}

#[test]
fn given_settings_with_unknown_keys_when_round_tripped_then_keys_are_kept() {
    let stored = json!({
        "userActivated": false,
        "dashboard": { "layout": "grid" },
        "workspaces": { "currentWorkspaceId": "abc" },
        "easyAIWorkflowOnboarded": true
    });

    let settings: UserSettings = serde_json::from_value(stored.clone()).unwrap();

    assert!(!settings.user_activated);
    assert_eq!(
        settings.workspaces.current_workspace_id.as_deref(),
        Some("abc")
    );
    assert_eq!(serde_json::to_value(&settings).unwrap(), stored);
}

#[test]
fn given_default_answers_then_survey_is_completed_v4() {
    let value = serde_json::to_value(PersonalizationAnswers::default()).unwrap();

    assert_eq!(
        value,
        json!({ "version": "v4", "completed": true, "answers": {} })
    );
}

#[test]
fn given_empty_blobs_when_deserialized_then_missing_keys_default() {
    let settings: UserSettings = serde_json::from_value(json!({})).unwrap();
    let answers: PersonalizationAnswers =
        serde_json::from_value(json!({ "answers": { "role": "dev" } })).unwrap();

    assert!(!settings.user_activated);
    assert!(settings.dashboard.is_empty());
    assert_eq!(answers.version, "");
    assert!(!answers.completed);
    assert_eq!(answers.answers.get("role"), Some(&json!("dev")));
}
