//! Journal entry handlers.
//!
//! Handlers follow the thin-layer pattern: validate inputs, delegate to the
//! service layer, return responses.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::journal::{CreateJournalRequest, JournalEntry},
    services::journal,
    state::AppState,
};

/// POST /journal
///
/// Analyzes the submitted text through the analysis service and persists the
/// entry with its score, explanation, and recommendation.
///
/// # HTTP Status Codes
/// - `201 CREATED`: Entry saved
/// - `400 BAD_REQUEST`: Empty content
/// - `500 INTERNAL_SERVER_ERROR`: Analysis service or database failure
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateJournalRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let entry = journal::create_entry(
        &mut conn,
        state.analysis.as_ref(),
        auth_user.id,
        request.content,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Journal entry saved successfully",
            "score": entry.score,
            "explanation": entry.explanation,
            "recommendation": entry.recommendation
        })),
    ))
}

/// GET /journal
///
/// Lists the caller's journal entries, newest first.
pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<JournalEntry>>> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let entries = journal::list_entries(&mut conn, auth_user.id).await?;

    Ok(Json(entries))
}

/// GET /journal/{user_id}
///
/// Lists a user's journal entries. The caller must be that user.
pub async fn list_entries_for_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<JournalEntry>>> {
    auth_user.ensure_owns(user_id)?;

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let entries = journal::list_entries(&mut conn, user_id).await?;

    Ok(Json(entries))
}

/// DELETE /journal/{id}
///
/// Deletes one of the caller's journal entries.
///
/// # HTTP Status Codes
/// - `200 OK`: Entry deleted
/// - `403 FORBIDDEN`: Entry belongs to another user
/// - `404 NOT_FOUND`: No entry with this id
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(entry_id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    journal::delete_entry(&mut conn, entry_id, auth_user.id).await?;

    Ok(Json(serde_json::json!({
        "message": "Journal entry deleted successfully"
    })))
}
