use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// One question of a static quiz: parallel option labels and numeric scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub scores: Vec<i32>,
}

/// A static quiz definition from the in-memory catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub id: i32,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "resultText")]
    pub result_texts: Vec<String>,
}

/// One answered question as persisted with a quiz result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question: String,
    #[serde(rename = "selectedOption")]
    pub selected_option: String,
    pub score: i32,
}

/// One completed quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizResult {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "quizId")]
    pub quiz_id: i32,
    pub title: String,
    pub answers: Json<Vec<QuizAnswer>>,
    #[serde(rename = "totalScore")]
    pub total_score: i32,
    #[serde(rename = "resultText")]
    pub result_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuizResult {
    pub user_id: i64,
    pub quiz_id: i32,
    pub title: String,
    pub answers: Vec<QuizAnswer>,
    pub total_score: i32,
    pub result_text: String,
}

/// Quiz submission: answer indices aligned by position to the quiz's
/// questions. A `null` entry means the question was left unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(rename = "quizId")]
    pub quiz_id: i32,
    pub answers: Vec<Option<usize>>,
}
