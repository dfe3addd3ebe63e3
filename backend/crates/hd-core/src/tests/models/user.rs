use crate::User;

fn sample_user() -> User {
    User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "Alice".to_string(),
        "Smith".to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
    )
}

#[test]
fn test_user_new_is_active_with_matching_timestamps() {
    let user = sample_user();

    assert!(user.is_active);
    assert_eq!(user.date_joined, user.updated_at);
    assert_eq!(user.username, "alice");
}

#[test]
fn test_user_new_generates_distinct_ids() {
    assert_ne!(sample_user().id, sample_user().id);
}

#[test]
fn test_user_debug_redacts_password_hash() {
    let user = sample_user();

    let debug = format!("{:?}", user);

    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("argon2id"));
}
