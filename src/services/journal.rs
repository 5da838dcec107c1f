use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::journal::{JournalEntry, NewJournalEntry},
    queries::journal,
    services::analysis::AnalysisService,
};

/// Analyzes journal text and persists the entry with its scores.
///
/// The analysis call happens first; if the upstream fails, nothing is
/// persisted.
pub async fn create_entry(
    conn: &mut DbConn,
    analysis: &dyn AnalysisService,
    user_id: i64,
    content: String,
) -> Result<JournalEntry> {
    if content.trim().is_empty() {
        return Err(Error::Validation("Journal content is required".to_string()));
    }

    let scored = analysis.analyze_journal(&content).await?;

    let entry = journal::create_entry(
        conn,
        NewJournalEntry {
            user_id,
            content,
            score: scored.score,
            explanation: scored.explanation,
            recommendation: scored.recommendation,
        },
    )
    .await?;

    Ok(entry)
}

/// Lists a user's journal entries, newest first.
pub async fn list_entries(conn: &mut DbConn, user_id: i64) -> Result<Vec<JournalEntry>> {
    journal::list_by_user(conn, user_id).await
}

/// Deletes a journal entry after checking ownership.
///
/// # Errors
/// * `NotFound` - no entry with this id
/// * `Forbidden` - the entry belongs to another user
pub async fn delete_entry(conn: &mut DbConn, entry_id: i64, requesting_user_id: i64) -> Result<()> {
    let entry = journal::get_entry(conn, entry_id)
        .await?
        .ok_or_else(|| Error::NotFound("Journal entry not found".to_string()))?;

    if entry.user_id != requesting_user_id {
        return Err(Error::Forbidden(
            "Not authorized to delete this entry".to_string(),
        ));
    }

    journal::delete_entry(conn, entry_id).await
}
