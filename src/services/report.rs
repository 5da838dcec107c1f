use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::{journal::JournalEntry, mood::MoodEntry, quiz::QuizResult},
    queries,
    services::analysis::{AnalysisService, ReportScores},
};
use serde::Serialize;

/// The aggregate analysis report: upstream narrative plus the scores it was
/// built from.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub analysis: String,
    pub scores: ReportScores,
}

/// Combines the latest record from each subsystem into one score aggregate.
pub fn assemble_scores(
    journal: &JournalEntry,
    mood: &MoodEntry,
    quiz: &QuizResult,
) -> ReportScores {
    ReportScores {
        journal_score: journal.score,
        self_awareness_score: mood.self_awareness_score,
        mental_score: mood.mental_score,
        eq_score: mood.eq_score,
        quiz_score: quiz.total_score,
    }
}

/// Builds the aggregate analysis report for one user.
///
/// Fetches the most recent journal, mood, and quiz records, sends the
/// combined scores upstream for a narrative, and returns both.
///
/// # Errors
/// * `Validation` - one of the three subsystems has no records yet
/// * `Upstream` - the analysis service call failed
pub async fn build_report(
    conn: &mut DbConn,
    analysis: &dyn AnalysisService,
    user_id: i64,
) -> Result<Report> {
    let journal = queries::journal::latest_for_user(conn, user_id).await?;
    let mood = queries::mood::latest_for_user(conn, user_id).await?;
    let quiz = queries::quiz_results::latest_for_user(conn, user_id).await?;

    let (Some(journal), Some(mood), Some(quiz)) = (journal, mood, quiz) else {
        return Err(Error::Validation(
            "Missing data for analysis report".to_string(),
        ));
    };

    let scores = assemble_scores(&journal, &mood, &quiz);
    let narrative = analysis.analyze_report(&scores).await?;

    Ok(Report {
        analysis: narrative.analysis,
        scores,
    })
}
