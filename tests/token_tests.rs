//! Bearer-token issue/validate round trips.

use mindtrack::error::Error;
use mindtrack::services::jwt;

const SECRET: &str = "integration-test-secret";

#[test]
fn issued_token_validates_to_same_user() {
    let token = jwt::generate_jwt(123, SECRET, 24).unwrap();
    let user_id = jwt::get_user_id_from_token(&token, SECRET).unwrap();
    assert_eq!(user_id, 123);
}

#[test]
fn expired_token_is_rejected() {
    let token = jwt::generate_jwt(123, SECRET, -2).unwrap();
    let err = jwt::get_user_id_from_token(&token, SECRET).unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let token = jwt::generate_jwt(123, "some-other-secret", 24).unwrap();
    assert!(jwt::get_user_id_from_token(&token, SECRET).is_err());
}

#[test]
fn bearer_header_round_trip() {
    let token = jwt::generate_jwt(7, SECRET, 24).unwrap();
    let header = format!("Bearer {}", token);
    let user_id = jwt::authenticate_bearer(Some(&header), SECRET).unwrap();
    assert_eq!(user_id, 7);
}

#[test]
fn missing_header_is_authentication_error() {
    let err = jwt::authenticate_bearer(None, SECRET).unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}
