use crate::{IdentityProjection, Role, User};

use googletest::prelude::*;

fn sample_user() -> User {
    User::new(
        "bob".to_string(),
        "bob@example.com".to_string(),
        String::new(),
        String::new(),
        "secret-hash-value".to_string(),
    )
}

#[test]
fn given_user_with_role_when_projected_then_role_is_rendered() {
    let user = sample_user();

    let projection = IdentityProjection::new(&user, Some(Role::Reporter));
    let json = serde_json::to_value(&projection).unwrap();

    assert_eq!(json["username"].as_str(), Some("bob"));
    assert_eq!(json["role"].as_str(), Some("REPORTER"));
    assert_eq!(json["id"].as_str(), Some(user.id.to_string().as_str()));
}

#[test]
fn given_user_without_profile_when_projected_then_role_is_null() {
    let projection = IdentityProjection::new(&sample_user(), None);
    let json = serde_json::to_value(&projection).unwrap();

    assert_that!(json["role"].is_null(), eq(true));
}

#[test]
fn given_any_user_when_projected_then_no_password_material_is_exposed() {
    let user = sample_user();

    let json = serde_json::to_string(&IdentityProjection::new(&user, Some(Role::Admin))).unwrap();

    assert_that!(json, not(contains_substring("password")));
    assert_that!(json, not(contains_substring(user.password_hash.as_str())));
}
