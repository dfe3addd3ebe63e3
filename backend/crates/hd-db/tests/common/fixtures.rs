use hd_core::User;

/// Creates a test User; the hash is opaque to the store
pub fn create_test_user(username: &str, email: &str) -> User {
    User::new(
        username.to_string(),
        email.to_string(),
        "Test".to_string(),
        "User".to_string(),
        "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}
