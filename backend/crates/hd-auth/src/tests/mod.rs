mod jwt;

use hd_core::User;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn test_user() -> User {
    User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "Alice".to_string(),
        "Smith".to_string(),
        "unused-hash".to_string(),
    )
}
