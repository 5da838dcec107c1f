//! Client for the external content-analysis service.
//!
//! The service is a black box reached over HTTP: it accepts text (or an
//! aggregate of scores) and returns numeric scores plus explanatory text.
//! Handlers depend on the [`AnalysisService`] trait, so tests can inject a
//! stub instead of a live upstream.

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scores returned for one journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub score: f64,
    pub explanation: String,
    pub recommendation: String,
}

/// Scores returned for one mood questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodScores {
    pub mental_score: f64,
    pub eq_score: f64,
    pub self_awareness_score: f64,
}

/// The latest score from each subsystem, sent upstream for the combined
/// narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportScores {
    pub journal_score: f64,
    pub self_awareness_score: f64,
    pub mental_score: f64,
    pub eq_score: f64,
    pub quiz_score: i32,
}

/// Narrative paragraph produced from an aggregate of scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub analysis: String,
}

/// Capability interface for the external scoring service.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Scores a free-text journal entry.
    async fn analyze_journal(&self, content: &str) -> Result<JournalAnalysis>;

    /// Scores a mood questionnaire rendered as "Q: ...\nA: ..." lines.
    async fn analyze_mood(&self, prompt: &str) -> Result<MoodScores>;

    /// Produces a combined narrative from the aggregate scores.
    async fn analyze_report(&self, scores: &ReportScores) -> Result<ReportAnalysis>;
}

#[derive(Serialize)]
struct ContentPayload<T: Serialize> {
    content: T,
}

/// Production implementation backed by reqwest.
pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisService {
    /// Builds a client with the configured base URL and request timeout.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POSTs `{"content": ...}` to the given path and decodes the JSON reply.
    ///
    /// Network errors, timeouts, non-2xx statuses, and undecodable bodies all
    /// surface as `Upstream` so callers never persist partial results.
    async fn post_content<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(&ContentPayload { content: body })
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "Analysis service returned {} for {}",
                status, path
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| Error::Upstream(format!("Malformed response from {}: {}", path, e)))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze_journal(&self, content: &str) -> Result<JournalAnalysis> {
        self.post_content("/analyze", &content).await
    }

    async fn analyze_mood(&self, prompt: &str) -> Result<MoodScores> {
        self.post_content("/analyze_mood", &prompt).await
    }

    async fn analyze_report(&self, scores: &ReportScores) -> Result<ReportAnalysis> {
        self.post_content("/analyze_report", scores).await
    }
}
