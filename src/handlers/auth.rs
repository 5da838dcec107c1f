//! Signup and login handlers.

use axum::{Json, extract::State, http::StatusCode};
use crate::{
    error::{Error, Result},
    models::users::{LoginUser, RegisterUser},
    services::users,
    state::AppState,
};

/// POST /signup
///
/// Registers a new user.
///
/// # Request Body
/// - `username`: desired username (must be unique)
/// - `email`: email address (must be unique and well-formed)
/// - `password`: at least 5 characters
///
/// # HTTP Status Codes
/// - `201 CREATED`: User registered successfully
/// - `400 BAD_REQUEST`: Validation error or username/email already taken
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<RegisterUser>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    users::register_user(&mut conn, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User registered successfully"
        })),
    ))
}

/// POST /login
///
/// Authenticates a user and returns a bearer token.
///
/// # Request Body
/// - `username`: username
/// - `password`: password
///
/// # Returns
/// JSON response with `token` (valid 24 hours) and `userId`.
///
/// # HTTP Status Codes
/// - `200 OK`: Authentication successful
/// - `401 UNAUTHORIZED`: Unknown username or wrong password
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let result = users::login_user(&mut conn, request, &state.config.jwt).await?;

    Ok(Json(serde_json::json!({
        "token": result.token,
        "userId": result.user_id
    })))
}
