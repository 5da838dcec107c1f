use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One free-text journal submission together with its analysis scores.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub content: String,
    /// Mental-health score assigned by the analysis service (1-10).
    pub score: f64,
    /// Why this score was given.
    pub explanation: String,
    /// Suggested action for the user.
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub user_id: i64,
    pub content: String,
    pub score: f64,
    pub explanation: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalRequest {
    pub content: String,
}
