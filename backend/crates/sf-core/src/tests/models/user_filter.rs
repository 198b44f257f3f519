use crate::{Role, StatusFilter, UserFilter, UserRecord};

use std::str::FromStr;

use serde_json::json;

fn record(id: &str, category: &str, first: &str, active: Option<bool>, phone: &str) -> UserRecord {
    let mut doc = json!({
        "category": category,
        "email": format!("{id}@shop.test"),
        "firstName": first,
        "lastName": "Smith",
        "phone": phone,
    });
    if let Some(active) = active {
        doc["isActive"] = json!(active);
    }
    let serde_json::Value::Object(doc) = doc else {
        unreachable!()
    };
    UserRecord::from_document(id, doc).unwrap()
}

#[test]
fn test_default_filter_matches_everything() {
    let filter = UserFilter::default();

    assert!(filter.matches(&record("a", "customer", "Ann", Some(true), "")));
    assert!(filter.matches(&record("b", "webmaster", "Bob", None, "")));
}

#[test]
fn test_search_is_case_insensitive_over_names_email_and_phone() {
    let filter = UserFilter {
        search: Some("ANN".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&record("x", "customer", "Annabel", Some(true), "")));
    assert!(!filter.matches(&record("y", "customer", "Bob", Some(true), "")));

    let by_phone = UserFilter {
        search: Some("0199".to_string()),
        ..Default::default()
    };
    assert!(by_phone.matches(&record("z", "customer", "Cy", Some(true), "555-0199")));

    let by_email = UserFilter {
        search: Some("q@SHOP".to_string()),
        ..Default::default()
    };
    assert!(by_email.matches(&record("q", "customer", "Cy", Some(true), "")));
}

#[test]
fn test_category_and_status_facets_combine() {
    let filter = UserFilter {
        search: None,
        category: Some(Role::Franchise),
        status: StatusFilter::Inactive,
    };

    assert!(filter.matches(&record("a", "franchise", "A", Some(false), "")));
    assert!(filter.matches(&record("b", "franchise", "B", None, "")));
    assert!(!filter.matches(&record("c", "franchise", "C", Some(true), "")));
    assert!(!filter.matches(&record("d", "customer", "D", Some(false), "")));
}

#[test]
fn test_status_filter_from_str() {
    assert_eq!(StatusFilter::from_str("active").unwrap(), StatusFilter::Active);
    assert_eq!(StatusFilter::from_str("inactive").unwrap(), StatusFilter::Inactive);
    assert_eq!(StatusFilter::from_str("all").unwrap(), StatusFilter::All);
    assert!(StatusFilter::from_str("banned").is_err());
}
