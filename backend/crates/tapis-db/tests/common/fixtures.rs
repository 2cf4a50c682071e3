use tapis_core::{NewUser, TapisIdentity};

/// Creates a NewUser the way a first Tapis login does
pub fn create_test_new_user(username: &str, role_slug: Option<&str>) -> NewUser {
    let identity = TapisIdentity::new(username);
    let mut new_user = NewUser::for_tapis(&identity, "secret123", None);
    new_user.role_slug = role_slug.map(String::from);
    new_user
}
