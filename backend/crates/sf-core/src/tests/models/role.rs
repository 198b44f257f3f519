use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str_round_trips_through_from_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_rejects_unknown_category() {
    let result = Role::from_str("franchiser");

    assert!(matches!(result, Err(CoreError::InvalidRole { ref value, .. }) if value == "franchiser"));
}

#[test]
fn test_only_webmaster_is_privileged() {
    assert!(Role::Webmaster.is_privileged());
    assert!(!Role::Customer.is_privileged());
    assert!(!Role::Franchise.is_privileged());
    assert!(!Role::Test.is_privileged());
}

#[test]
fn test_customer_is_the_only_role_without_username() {
    assert!(!Role::Customer.requires_username());
    assert!(Role::Franchise.requires_username());
    assert!(Role::Webmaster.requires_username());
    assert!(Role::Test.requires_username());
}

#[test]
fn test_role_serializes_as_lowercase_string() {
    let json = serde_json::to_string(&Role::Webmaster).unwrap();
    assert_eq!(json, "\"webmaster\"");
}
