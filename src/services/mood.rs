use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::mood::{MoodEntry, MoodResponse, NewMoodEntry},
    queries::mood,
    services::analysis::AnalysisService,
};

/// Renders questionnaire responses as the "Q: ...\nA: ..." prompt the
/// analysis service expects.
pub fn format_prompt(responses: &[MoodResponse]) -> String {
    responses
        .iter()
        .map(|r| format!("Q: {}\nA: {}", r.question, r.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Analyzes a mood questionnaire and persists the entry with its scores.
///
/// The responses are stored verbatim alongside the three scores. Nothing is
/// persisted if the upstream call fails.
pub async fn create_entry(
    conn: &mut DbConn,
    analysis: &dyn AnalysisService,
    user_id: i64,
    responses: Vec<MoodResponse>,
) -> Result<MoodEntry> {
    if responses.is_empty() {
        return Err(Error::Validation("Responses are required".to_string()));
    }

    let prompt = format_prompt(&responses);
    let scores = analysis.analyze_mood(&prompt).await?;

    let entry = mood::create_entry(
        conn,
        NewMoodEntry {
            user_id,
            responses,
            mental_score: scores.mental_score,
            eq_score: scores.eq_score,
            self_awareness_score: scores.self_awareness_score,
        },
    )
    .await?;

    Ok(entry)
}

/// Lists a user's mood entries, newest first.
pub async fn list_entries(conn: &mut DbConn, user_id: i64) -> Result<Vec<MoodEntry>> {
    mood::list_by_user(conn, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(question: &str, answer: &str) -> MoodResponse {
        MoodResponse {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_format_prompt_single_response() {
        let prompt = format_prompt(&[response("How do you feel?", "Calm")]);
        assert_eq!(prompt, "Q: How do you feel?\nA: Calm");
    }

    #[test]
    fn test_format_prompt_joins_pairs_with_newlines() {
        let prompt = format_prompt(&[
            response("How do you feel?", "Calm"),
            response("Did you sleep well?", "Yes"),
        ]);
        assert_eq!(
            prompt,
            "Q: How do you feel?\nA: Calm\nQ: Did you sleep well?\nA: Yes"
        );
    }

    #[test]
    fn test_format_prompt_empty() {
        assert_eq!(format_prompt(&[]), "");
    }
}
