//! Confidence scoring.
//!
//! Confidence starts at 0.5 and grows with keyword evidence for the winning
//! priority and category, sentiment magnitude and the number of entities. It
//! is a bounded heuristic, not a calibrated probability.

use super::category::TaskCategory;
use super::keywords::keyword_score;
use super::patterns::PatternSet;
use super::priority::PriorityLevel;

const BASE_CONFIDENCE: f64 = 0.5;
const PRIORITY_WEIGHT: f64 = 0.3;
const CATEGORY_WEIGHT: f64 = 0.3;
const SENTIMENT_WEIGHT: f64 = 0.2;
const ENTITY_WEIGHT: f64 = 0.1;
const MAX_ENTITY_CONTRIBUTION: f64 = 0.3;

/// Calculates the confidence of a classification over one vocabulary
pub struct ConfidenceCalculator<'a> {
    patterns: &'a PatternSet,
}

impl<'a> ConfidenceCalculator<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Keyword score divided by the longest keyword list; zero for empty tables
    fn normalize(score: f64, max_len: usize) -> f64 {
        if max_len == 0 {
            0.0
        } else {
            score / max_len as f64
        }
    }

    /// Confidence in `[0, 1]` for the chosen priority and category
    pub fn calculate(
        &self,
        text: &str,
        priority: PriorityLevel,
        category: TaskCategory,
        sentiment: f64,
        entity_count: usize,
    ) -> f64 {
        let priority_score = keyword_score(text, &self.patterns.priority.get(priority).keywords);
        let category_score = keyword_score(text, &self.patterns.category.get(category).keywords);

        let normalized_priority =
            Self::normalize(priority_score, self.patterns.priority.max_keyword_count());
        let normalized_category =
            Self::normalize(category_score, self.patterns.category.max_keyword_count());

        let sentiment_confidence = sentiment.abs() * SENTIMENT_WEIGHT;
        let entity_confidence = (entity_count as f64 * ENTITY_WEIGHT).min(MAX_ENTITY_CONTRIBUTION);

        let confidence = BASE_CONFIDENCE
            + normalized_priority * PRIORITY_WEIGHT
            + normalized_category * CATEGORY_WEIGHT
            + sentiment_confidence
            + entity_confidence;

        confidence.clamp(0.0, 1.0)
    }
}
