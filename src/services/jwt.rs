use crate::error::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user id as string
    pub sub: String,
    /// Expiration time as Unix timestamp
    pub exp: i64,
    /// Issued at time as Unix timestamp
    pub iat: i64,
}

/// Generates a signed bearer token for a user
///
/// # Arguments
/// * `user_id` - The user's numeric identifier
/// * `secret` - The JWT secret key for signing
/// * `expiration_hours` - Token lifetime in hours (from config; 24 by default)
///
/// # Returns
/// A JWT token string
pub fn generate_jwt(user_id: i64, secret: &str, expiration_hours: i64) -> Result<String> {
    let now = Utc::now();
    let expiration = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| Error::Internal(format!("Failed to generate JWT: {}", e)))
}

/// Verifies a JWT token and returns the claims if valid
///
/// # Errors
/// Returns an error if the token is invalid, expired, or has a bad signature
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        // Check error kind to provide better error messages
        let error_msg = e.to_string().to_lowercase();
        if error_msg.contains("expired") {
            Error::Authentication("Token has expired".to_string())
        } else if error_msg.contains("signature") {
            Error::Authentication("Invalid token signature".to_string())
        } else {
            Error::Authentication(format!("Invalid token: {}", e))
        }
    })?;

    Ok(token_data.claims)
}

/// Extracts the user id from a valid JWT token
pub fn get_user_id_from_token(token: &str, secret: &str) -> Result<i64> {
    let claims = verify_jwt(token, secret)?;
    claims
        .sub
        .parse::<i64>()
        .map_err(|_| Error::Internal("Invalid user id in token".to_string()))
}

/// Validates a JWT from an Authorization header and returns the user id
/// Format: "Authorization: Bearer <token>"
pub fn authenticate_bearer(auth_header: Option<&str>, secret: &str) -> Result<i64> {
    let token = extract_token_from_header(auth_header)?;
    get_user_id_from_token(&token, secret)
}

/// Extracts the Bearer token from the Authorization header
fn extract_token_from_header(auth_header: Option<&str>) -> Result<String> {
    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = header[7..].to_string();
            if token.is_empty() {
                return Err(Error::Authentication("Empty token".to_string()));
            }
            Ok(token)
        }
        Some(_) => Err(Error::Authentication(
            "Invalid Authorization header format. Expected: 'Bearer <token>'".to_string(),
        )),
        None => Err(Error::Authentication("No token provided".to_string())),
    }
}
