use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Employer.as_str(), "employer");
    assert_eq!(Role::Jobseeker.as_str(), "jobseeker");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("employer").unwrap(), Role::Employer);
    assert_eq!(Role::from_str("jobseeker").unwrap(), Role::Jobseeker);
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
    let role: Role = serde_json::from_str("\"jobseeker\"").unwrap();
    assert_eq!(role, Role::Jobseeker);
}
