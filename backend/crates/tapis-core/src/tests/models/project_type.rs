use crate::ProjectType;

use std::str::FromStr;

#[test]
fn test_project_type_as_str() {
    assert_eq!(ProjectType::Personal.as_str(), "personal");
    assert_eq!(ProjectType::Team.as_str(), "team");
}

#[test]
fn test_project_type_from_str() {
    assert_eq!(
        ProjectType::from_str("personal").unwrap(),
        ProjectType::Personal
    );
    assert_eq!(ProjectType::from_str("team").unwrap(), ProjectType::Team);
    assert!(ProjectType::from_str("Personal").is_err());
}

#[test]
fn test_project_type_default() {
    assert_eq!(ProjectType::default(), ProjectType::Personal);
}
