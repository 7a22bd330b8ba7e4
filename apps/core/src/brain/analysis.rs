//! Analysis Result - Output structure of the task analyzer.
//!
//! Contains the inferred priority and category plus the diagnostic signals
//! they were derived from. Carries no identity and no timestamp, so identical
//! input always yields an identical result.

use serde::{Deserialize, Serialize};

use super::category::TaskCategory;
use super::priority::PriorityLevel;

/// Intermediate signals extracted from the task text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NlpInsights {
    /// Summed lexicon polarity
    pub sentiment: f64,
    /// Name, organization and project references, duplicates kept
    pub entities: Vec<String>,
    /// Lower-cased word tokens
    pub tokens: Vec<String>,
    /// Time vocabulary found in the text, in vocabulary order
    pub time_indicators: Vec<String>,
}

/// Complete result of analyzing one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub priority: PriorityLevel,
    pub category: TaskCategory,
    /// Heuristic support for the classification, in `[0, 1]`
    pub confidence: f64,
    /// Explanation lines, never empty
    pub reasoning: Vec<String>,
    /// Diagnostic signals; callers need not persist these
    pub nlp_insights: NlpInsights,
}

impl AnalysisResult {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Priority: {}, Category: {}, Confidence: {:.0}%, Entities: {}, Sentiment: {:.2}",
            self.priority,
            self.category,
            self.confidence * 100.0,
            self.nlp_insights.entities.len(),
            self.nlp_insights.sentiment
        )
    }
}
