use crate::{config::Config, database::DbPool, services::analysis::AnalysisService};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
///
/// Holds the database pool, the loaded configuration, and the injected
/// analysis-service client. Cloning is cheap; everything inside is shared.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the database
    pub pool: DbPool,
    /// Application configuration loaded at startup
    pub config: Arc<Config>,
    /// Client for the external content-analysis service
    pub analysis: Arc<dyn AnalysisService>,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `config` - Loaded application configuration
    /// * `analysis` - Analysis-service client (real or stub)
    pub fn new(pool: DbPool, config: Config, analysis: Arc<dyn AnalysisService>) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            analysis,
        }
    }
}
