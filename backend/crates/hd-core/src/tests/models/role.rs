use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Reporter.as_str(), "REPORTER");
    assert_eq!(Role::Technician.as_str(), "TECHNICIAN");
    assert_eq!(Role::Manager.as_str(), "MANAGER");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
}

#[test]
fn test_role_from_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    let result = Role::from_str("reporter");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_default_is_reporter() {
    assert_eq!(Role::default(), Role::Reporter);
}

#[test]
fn test_role_serializes_as_upper_case_name() {
    let json = serde_json::to_string(&Role::Technician).unwrap();
    assert_eq!(json, "\"TECHNICIAN\"");

    let parsed: Role = serde_json::from_str("\"MANAGER\"").unwrap();
    assert_eq!(parsed, Role::Manager);
}

#[test]
fn test_invalid_role_error_is_keyed_to_role_field() {
    let err = Role::from_str("SUPERUSER").unwrap_err();

    assert_eq!(err.field(), Some("role"));
}
