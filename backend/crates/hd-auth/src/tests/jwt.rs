use super::TEST_SECRET;
use crate::{AuthError, Claims, JwtValidator, TokenType};

use jsonwebtoken::Algorithm;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims(token_type: TokenType) -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        username: "alice".to_string(),
        token_type,
        jti: Uuid::new_v4().to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_valid_access_token_when_validated_then_returns_claims() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let claims = valid_claims(TokenType::Access);
    let token = create_test_token(&claims, TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(result.is_ok());
    let validated = result.unwrap();
    assert_eq!(validated.sub, claims.sub);
    assert_eq!(validated.username, "alice");
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let mut claims = valid_claims(TokenType::Access);
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_token_expired_within_leeway_when_validated_then_accepted() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let mut claims = valid_claims(TokenType::Access);
    claims.exp = chrono::Utc::now().timestamp() - 5;
    let token = create_test_token(&claims, TEST_SECRET);

    assert!(validator.validate(&token, TokenType::Access).is_ok());
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-by";
    let validator = JwtValidator::with_hs256(wrong_secret);
    let token = create_test_token(&valid_claims(TokenType::Access), TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_refresh_token_when_validated_as_access_then_returns_wrong_type() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let token = create_test_token(&valid_claims(TokenType::Refresh), TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(matches!(
        result,
        Err(AuthError::WrongTokenType {
            expected: TokenType::Access,
            actual: TokenType::Refresh,
            ..
        })
    ));
}

#[test]
fn given_non_uuid_subject_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let mut claims = valid_claims(TokenType::Access);
    claims.sub = "user-123".to_string();
    let token = create_test_token(&claims, TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(matches!(result, Err(AuthError::InvalidClaim { claim, .. }) if claim == "sub"));
}

#[test]
fn given_empty_jti_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);
    let mut claims = valid_claims(TokenType::Access);
    claims.jti = String::new();
    let token = create_test_token(&claims, TEST_SECRET);

    let result = validator.validate(&token, TokenType::Access);

    assert!(matches!(result, Err(AuthError::InvalidClaim { claim, .. }) if claim == "jti"));
}

#[test]
fn given_garbage_token_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(TEST_SECRET);

    let result = validator.validate("not.a.jwt", TokenType::Access);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_bearer_header_when_extracted_then_returns_token() {
    assert_eq!(JwtValidator::bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
}

#[test]
fn given_missing_header_when_extracted_then_returns_missing_header() {
    let result = JwtValidator::bearer_token(None);

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn given_basic_scheme_when_extracted_then_returns_invalid_scheme() {
    let result = JwtValidator::bearer_token(Some("Basic dXNlcjpwYXNz"));

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_empty_bearer_when_extracted_then_returns_invalid_token() {
    let result = JwtValidator::bearer_token(Some("Bearer   "));

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}
