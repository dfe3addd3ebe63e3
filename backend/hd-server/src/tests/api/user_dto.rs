use crate::UserDto;

use hd_core::{IdentityProjection, Role, User};

use googletest::prelude::*;

fn user() -> User {
    User::new(
        "bob".to_string(),
        "bob@example.com".to_string(),
        "Bob".to_string(),
        "Builder".to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

#[test]
fn given_projection_with_role_when_serialized_then_flat_json_with_role_name() {
    let dto = UserDto::from(IdentityProjection::new(&user(), Some(Role::Manager)));

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["username"], "bob");
    assert_eq!(json["role"], "MANAGER");
    assert_that!(json.as_object().unwrap().len(), eq(6));
}

#[test]
fn given_projection_without_role_when_serialized_then_role_null() {
    let dto = UserDto::from(IdentityProjection::new(&user(), None));

    let json = serde_json::to_value(&dto).unwrap();

    assert!(json["role"].is_null());
}

#[test]
fn given_user_when_serialized_then_no_password_material() {
    let user = user();
    let dto = UserDto::from(IdentityProjection::new(&user, Some(Role::Reporter)));

    let rendered = serde_json::to_string(&dto).unwrap();

    assert_that!(rendered.as_str(), not(contains_substring("password")));
    assert_that!(rendered.as_str(), not(contains_substring("argon2")));
}
