//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is read by the binary
//! before this runs). Command-line flags override them afterwards.

use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::brain::{PatternSet, TaskAnalyzer};
use crate::error::AppError;

/// Path to a JSON vocabulary file replacing the built-in one
pub const PATTERNS_ENV: &str = "TASKSENSE_PATTERNS";
/// `tracing` filter directive
pub const LOG_ENV: &str = "TASKSENSE_LOG";
/// Worker threads for batch classification
pub const BATCH_WORKERS_ENV: &str = "TASKSENSE_BATCH_WORKERS";

const DEFAULT_BATCH_WORKERS: usize = 4;
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub patterns_path: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub batch_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            patterns_path: None,
            log_filter: None,
            batch_workers: DEFAULT_BATCH_WORKERS,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let batch_workers = match non_empty_var(BATCH_WORKERS_ENV) {
            Some(raw) => Self::parse_workers(&raw)?,
            None => DEFAULT_BATCH_WORKERS,
        };

        Ok(Self {
            patterns_path: non_empty_var(PATTERNS_ENV).map(PathBuf::from),
            log_filter: non_empty_var(LOG_ENV),
            batch_workers,
        })
    }

    /// Parse a worker count; zero is rejected
    pub fn parse_workers(raw: &str) -> Result<usize, AppError> {
        let workers: usize = raw.parse()?;
        if workers == 0 {
            return Err(AppError::Config(format!(
                "{} must be at least 1",
                BATCH_WORKERS_ENV
            )));
        }
        Ok(workers)
    }

    /// Filter directive for the log subscriber: explicit setting, then `RUST_LOG`, then `warn`
    pub fn effective_log_filter(&self) -> String {
        self.log_filter
            .clone()
            .or_else(|| non_empty_var("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Build the analyzer this configuration describes
    pub fn build_analyzer(&self) -> Result<TaskAnalyzer, AppError> {
        match &self.patterns_path {
            Some(path) => Ok(TaskAnalyzer::with_patterns(PatternSet::load(path)?)),
            None => {
                info!("Using built-in vocabulary");
                Ok(TaskAnalyzer::new())
            }
        }
    }
}
