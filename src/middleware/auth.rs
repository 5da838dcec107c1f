//! JWT authentication middleware.
//!
//! Validates the bearer token on protected routes and adds the authenticated
//! user's id to request extensions for handler access. All token failures
//! (missing header, bad signature, expiry) map to 401.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::{error::Result, services::jwt::authenticate_bearer, state::AppState};

use secrecy::ExposeSecret;

/// Authenticated user extracted from the JWT token
///
/// Added to request extensions by the JWT middleware after successful
/// validation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier (the token subject)
    pub id: i64,
}

impl AuthenticatedUser {
    /// Fails with `Forbidden` unless the caller is the given user.
    ///
    /// Used by the per-user listing routes so one user cannot read another
    /// user's records.
    pub fn ensure_owns(&self, user_id: i64) -> crate::error::Result<()> {
        if self.id != user_id {
            return Err(crate::error::Error::Forbidden(
                "Not authorized to access this user's records".to_string(),
            ));
        }
        Ok(())
    }
}

/// JWT authentication middleware
///
/// # Usage
/// Apply to protected routes using `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/journal", get(list_journal))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         jwt_auth_middleware,
///     ))
/// ```
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    let user_id = authenticate_bearer(auth_header, state.config.jwt.secret.expose_secret())?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { id: user_id });

    Ok(next.run(request).await)
}
