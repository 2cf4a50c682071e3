use crate::{CoreError, RoleType};

use std::str::FromStr;

#[test]
fn test_role_type_round_trips_through_str() {
    for role_type in [RoleType::Global, RoleType::Project] {
        assert_eq!(RoleType::from_str(role_type.as_str()).unwrap(), role_type);
    }
}

#[test]
fn test_role_type_rejects_unknown_value() {
    let result = RoleType::from_str("credential");

    assert!(matches!(result, Err(CoreError::InvalidRoleType { value, .. }) if value == "credential"));
}
