//! Aggregate analysis report handler.

use axum::{
    Json,
    extract::{Extension, State},
};
use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    services::report::{self, Report},
    state::AppState,
};

/// GET /api/generate-analysis
///
/// Builds the aggregate report from the caller's most recent journal, mood,
/// and quiz records and the upstream narrative.
///
/// # HTTP Status Codes
/// - `200 OK`: `{analysis, scores}`
/// - `400 BAD_REQUEST`: One of the three subsystems has no records yet
/// - `500 INTERNAL_SERVER_ERROR`: Analysis service or database failure
pub async fn generate_analysis(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Report>> {
    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| Error::Internal(format!("Failed to acquire database connection: {}", e)))?;

    let report = report::build_report(&mut conn, state.analysis.as_ref(), auth_user.id).await?;

    Ok(Json(report))
}
