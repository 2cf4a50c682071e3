use crate::{
    NewUser, PublicUser, Role, RoleType, TapisIdentity, User, UserSettings,
};

use chrono::Utc;
use uuid::Uuid;

fn owner_role() -> Role {
    Role {
        slug: "global:owner".to_string(),
        display_name: "Owner".to_string(),
        role_type: RoleType::Global,
        scopes: vec!["workflow:create".to_string(), "user:list".to_string()],
    }
}

fn user_with(role: Option<Role>, password_hash: Option<&str>) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: "jdoe@tacc.utexas.edu".to_string(),
        first_name: Some("jdoe".to_string()),
        last_name: Some("(Tapis)".to_string()),
        password_hash: password_hash.map(String::from),
        role_slug: role.as_ref().map(|r| r.slug.clone()),
        role,
        active: true,
        settings: Some(UserSettings::default()),
        personalization_answers: None,
        mfa_enabled: false,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn given_user_with_role_when_projected_then_scopes_come_from_role() {
    let user = user_with(Some(owner_role()), Some("$argon2id$stub"));

    let public = PublicUser::from_user(&user, true);

    assert_eq!(public.role.as_deref(), Some("global:owner"));
    assert_eq!(public.global_scopes, vec!["workflow:create", "user:list"]);
    assert!(public.mfa_authenticated);
    assert!(!public.is_pending);
}

#[test]
fn given_user_without_password_when_projected_then_is_pending() {
    let user = user_with(None, None);

    let public = PublicUser::from_user(&user, false);

    assert!(public.is_pending);
    assert!(public.global_scopes.is_empty());
}

#[test]
fn given_projection_when_serialized_then_password_never_appears() {
    let user = user_with(Some(owner_role()), Some("$argon2id$secret-hash"));

    let json = serde_json::to_string(&PublicUser::from_user(&user, false)).unwrap();

    assert!(!json.contains("secret-hash"));
    assert!(!json.contains("password"));
    assert!(json.contains("\"globalScopes\""));
}

#[test]
fn given_tapis_identity_when_new_user_built_then_fields_are_derived() {
    let identity = TapisIdentity::new("jdoe");

    let new_user = NewUser::for_tapis(&identity, "secret123", Some(&owner_role()));

    assert_eq!(new_user.email, "jdoe@tacc.utexas.edu");
    assert_eq!(new_user.first_name, "jdoe");
    assert_eq!(new_user.last_name, "(Tapis)");
    assert_eq!(new_user.role_slug.as_deref(), Some("global:owner"));
    assert!(new_user.active);
    assert!(new_user.settings.user_activated);
    assert!(!new_user.to_string().contains("secret123"));
}
