//! Report aggregation against a live database, with a stubbed analysis
//! service.

mod common;

use async_trait::async_trait;
use common::TestDb;
use mindtrack::error::{Error, Result};
use mindtrack::models::{
    journal::NewJournalEntry,
    mood::{MoodResponse, NewMoodEntry},
    quiz::NewQuizResult,
};
use mindtrack::queries::{journal, mood, quiz_results};
use mindtrack::services::analysis::{
    AnalysisService, JournalAnalysis, MoodScores, ReportAnalysis, ReportScores,
};
use mindtrack::services::report::build_report;

/// Stub that echoes the aggregate back as the narrative.
struct EchoAnalysis;

#[async_trait]
impl AnalysisService for EchoAnalysis {
    async fn analyze_journal(&self, _content: &str) -> Result<JournalAnalysis> {
        Err(Error::Upstream("not used in this test".to_string()))
    }

    async fn analyze_mood(&self, _prompt: &str) -> Result<MoodScores> {
        Err(Error::Upstream("not used in this test".to_string()))
    }

    async fn analyze_report(&self, scores: &ReportScores) -> Result<ReportAnalysis> {
        Ok(ReportAnalysis {
            analysis: format!(
                "journal {} quiz {}",
                scores.journal_score, scores.quiz_score
            ),
        })
    }
}

#[tokio::test]
async fn test_report_fails_while_any_store_is_empty() {
    let test_db = TestDb::new("test_report_fails_while_any_store_is_empty").await;
    let user = test_db.register_test_user().await;
    let mut conn = test_db.get_connection().await;

    // No records at all.
    let err = build_report(&mut conn, &EchoAnalysis, user.id).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // Journal alone is not enough; mood and quiz are still missing.
    journal::create_entry(
        &mut conn,
        NewJournalEntry {
            user_id: user.id,
            content: "Slept badly".to_string(),
            score: 4.0,
            explanation: "Fatigue showing".to_string(),
            recommendation: "Rest early".to_string(),
        },
    )
    .await
    .unwrap();

    let err = build_report(&mut conn, &EchoAnalysis, user.id).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_report_combines_latest_scores_from_all_three_stores() {
    let test_db = TestDb::new("test_report_combines_latest_scores_from_all_three_stores").await;
    let user = test_db.register_test_user().await;
    let mut conn = test_db.get_connection().await;

    journal::create_entry(
        &mut conn,
        NewJournalEntry {
            user_id: user.id,
            content: "Better week".to_string(),
            score: 6.5,
            explanation: "Improving mood".to_string(),
            recommendation: "Keep journaling".to_string(),
        },
    )
    .await
    .unwrap();

    mood::create_entry(
        &mut conn,
        NewMoodEntry {
            user_id: user.id,
            responses: vec![MoodResponse {
                question: "How do you feel right now?".to_string(),
                answer: "Settled".to_string(),
            }],
            mental_score: 5.0,
            eq_score: 7.5,
            self_awareness_score: 6.0,
        },
    )
    .await
    .unwrap();

    quiz_results::create_result(
        &mut conn,
        NewQuizResult {
            user_id: user.id,
            quiz_id: 1,
            title: "How stressed are you?".to_string(),
            answers: vec![],
            total_score: 9,
            result_text: "Mild stress detected.".to_string(),
        },
    )
    .await
    .unwrap();

    let report = build_report(&mut conn, &EchoAnalysis, user.id).await.unwrap();
    assert_eq!(report.scores.journal_score, 6.5);
    assert_eq!(report.scores.mental_score, 5.0);
    assert_eq!(report.scores.eq_score, 7.5);
    assert_eq!(report.scores.self_awareness_score, 6.0);
    assert_eq!(report.scores.quiz_score, 9);
    assert_eq!(report.analysis, "journal 6.5 quiz 9");
}

#[tokio::test]
async fn test_mood_responses_are_returned_verbatim_from_storage() {
    let test_db = TestDb::new("test_mood_responses_are_returned_verbatim_from_storage").await;
    let user = test_db.register_test_user().await;
    let mut conn = test_db.get_connection().await;

    let responses = vec![
        MoodResponse {
            question: "How do you feel right now?".to_string(),
            answer: "Tired but hopeful".to_string(),
        },
        MoodResponse {
            question: "Did you sleep well?".to_string(),
            answer: "About six hours".to_string(),
        },
    ];

    mood::create_entry(
        &mut conn,
        NewMoodEntry {
            user_id: user.id,
            responses: responses.clone(),
            mental_score: 5.0,
            eq_score: 6.0,
            self_awareness_score: 7.0,
        },
    )
    .await
    .unwrap();

    let stored = mood::list_by_user(&mut conn, user.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].responses.0, responses);
}
