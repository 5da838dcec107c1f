//! Quiz handlers: random quiz, submission scoring, and history.

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::quiz::{NewQuizResult, QuizDefinition, QuizResult, SubmitQuizRequest},
    queries::quiz_results,
    services::quiz,
    state::AppState,
};

/// GET /quiz
///
/// Returns one quiz definition chosen uniformly at random from the static
/// catalog. Public: no authentication required.
pub async fn random_quiz() -> Json<QuizDefinition> {
    Json(quiz::pick_random().clone())
}

/// POST /quiz/submit
///
/// Scores the submitted answer indices against the quiz's options/scores and
/// persists the attempt.
///
/// # Request Body
/// - `quizId`: id of the quiz being answered
/// - `answers`: option indices aligned to the quiz's questions; `null`
///   entries mean unanswered
///
/// # HTTP Status Codes
/// - `200 OK`: `{message, totalScore, resultText}`
/// - `400 BAD_REQUEST`: no answered questions, or an index out of range
/// - `404 NOT_FOUND`: unknown quiz id
pub async fn submit_quiz(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<Json<serde_json::Value>> {
    let scored = quiz::score(request.quiz_id, &request.answers)?;

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let result = quiz_results::create_result(
        &mut conn,
        NewQuizResult {
            user_id: auth_user.id,
            quiz_id: request.quiz_id,
            title: scored.title,
            answers: scored.answers,
            total_score: scored.total_score,
            result_text: scored.result_text,
        },
    )
    .await?;

    Ok(Json(serde_json::json!({
        "message": "Quiz submitted successfully",
        "totalScore": result.total_score,
        "resultText": result.result_text
    })))
}

/// GET /quiz/history
///
/// Lists the caller's quiz results, newest first.
pub async fn quiz_history(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<QuizResult>>> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let results = quiz_results::list_by_user(&mut conn, auth_user.id).await?;

    Ok(Json(results))
}

/// GET /quiz/{user_id}
///
/// Lists a user's quiz results. The caller must be that user.
pub async fn results_for_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<QuizResult>>> {
    auth_user.ensure_owns(user_id)?;

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let results = quiz_results::list_by_user(&mut conn, user_id).await?;

    Ok(Json(results))
}
