//! Mood questionnaire handlers.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::mood::{CreateMoodRequest, MoodEntry},
    services::mood,
    state::AppState,
};

/// POST /mood
///
/// Sends the questionnaire responses to the analysis service and persists
/// the entry with its three scores.
///
/// # Request Body
/// - `responses`: ordered `{question, answer}` pairs (at least one)
///
/// # HTTP Status Codes
/// - `201 CREATED`: `{message, scores}`
/// - `400 BAD_REQUEST`: Empty responses
/// - `500 INTERNAL_SERVER_ERROR`: Analysis service or database failure
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMoodRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let entry = mood::create_entry(
        &mut conn,
        state.analysis.as_ref(),
        auth_user.id,
        request.responses,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Mood analysis entry saved successfully",
            "scores": {
                "mental_score": entry.mental_score,
                "eq_score": entry.eq_score,
                "self_awareness_score": entry.self_awareness_score
            }
        })),
    ))
}

/// GET /mood/{user_id}
///
/// Lists a user's mood entries. The caller must be that user.
pub async fn list_entries_for_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<MoodEntry>>> {
    auth_user.ensure_owns(user_id)?;

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let entries = mood::list_entries(&mut conn, user_id).await?;

    Ok(Json(entries))
}
