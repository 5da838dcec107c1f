use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// One (question, answer) pair from the mood questionnaire, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodResponse {
    pub question: String,
    pub answer: String,
}

/// One completed mood questionnaire with its three analysis scores.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub responses: Json<Vec<MoodResponse>>,
    pub mental_score: f64,
    pub eq_score: f64,
    pub self_awareness_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMoodEntry {
    pub user_id: i64,
    pub responses: Vec<MoodResponse>,
    pub mental_score: f64,
    pub eq_score: f64,
    pub self_awareness_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMoodRequest {
    pub responses: Vec<MoodResponse>,
}
