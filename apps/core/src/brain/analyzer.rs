//! Task Analyzer - Main orchestrator for the Brain module.
//!
//! Normalizes the task text once, runs the extractors, feeds their output to
//! both classifiers and then to the confidence and reasoning stages.
//!
//! Letter case only matters through entity extraction: a capitalized bigram
//! such as "Call Team" becomes an entity, and entities feed the category
//! score.
//!
//! The analyzer is immutable after construction and holds no per-call state,
//! so one instance can be shared across threads by reference.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

use super::analysis::{AnalysisResult, NlpInsights};
use super::category::{CategoryClassifier, CategoryVerdict};
use super::confidence::ConfidenceCalculator;
use super::entities::{EntityExtractor, TimeIndicatorExtractor};
use super::patterns::PatternSet;
use super::priority::{PriorityClassifier, PriorityVerdict};
use super::reasoning::{ReasoningGenerator, ReasoningInput};
use super::tokenizer::{tokenize, SentimentScorer};

/// Analysis result together with the full per-level and per-category scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub result: AnalysisResult,
    pub priority_scores: PriorityVerdict,
    pub category_scores: CategoryVerdict,
}

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Clone)]
pub struct TaskAnalyzer {
    patterns: Cow<'static, PatternSet>,
    entity_extractor: EntityExtractor,
}

impl Default for TaskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskAnalyzer {
    /// Create an analyzer over the built-in vocabulary
    pub fn new() -> Self {
        Self {
            patterns: Cow::Borrowed(PatternSet::builtin()),
            entity_extractor: EntityExtractor::new(),
        }
    }

    /// Create an analyzer over its own vocabulary
    pub fn with_patterns(patterns: PatternSet) -> Self {
        Self {
            patterns: Cow::Owned(patterns),
            entity_extractor: EntityExtractor::new(),
        }
    }

    /// The vocabulary this analyzer scores with
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Combine title and description the way every stage sees them.
    ///
    /// Returns the case-preserved text (for entity extraction) and the
    /// normalized lower-case text (for everything else). The separating space
    /// is kept even without a description.
    fn combine(title: &str, description: Option<&str>) -> (String, String) {
        let combined = format!("{} {}", title, description.unwrap_or(""));
        let normalized = combined.to_lowercase();
        (combined, normalized)
    }

    /// Analyze a task and infer its priority and category
    pub fn analyze(&self, title: &str, description: Option<&str>) -> AnalysisResult {
        self.analyze_detailed(title, description).result
    }

    /// Analyze a task and keep every intermediate score
    pub fn analyze_detailed(&self, title: &str, description: Option<&str>) -> DetailedAnalysis {
        if title.trim().is_empty() {
            warn!("Analyzing a task with a blank title");
        }

        let (combined, text) = Self::combine(title, description);
        debug!("Analyzing task text: {:?}", text);

        let patterns: &PatternSet = &self.patterns;

        // 1. Extract signals
        let tokens = tokenize(&text);
        let sentiment = SentimentScorer::new(&patterns.lexicon).score(&tokens);
        let entities = self.entity_extractor.extract(&combined);
        let time_terms = TimeIndicatorExtractor::new(patterns).extract(&text);

        // 2. Classify
        let priority_scores =
            PriorityClassifier::new(patterns).classify(&text, sentiment, &time_terms);
        let category_scores = CategoryClassifier::new(patterns).classify(&text, &entities);
        let priority = priority_scores.level;
        let category = category_scores.category;

        // 3. Confidence
        let confidence = ConfidenceCalculator::new(patterns).calculate(
            &text,
            priority,
            category,
            sentiment,
            entities.len(),
        );

        // 4. Reasoning
        let time_indicators: Vec<String> = time_terms.into_iter().map(String::from).collect();
        let reasoning = ReasoningGenerator::new(patterns).generate(&ReasoningInput {
            text: &text,
            priority,
            category,
            sentiment,
            entities: &entities,
            time_indicators: &time_indicators,
        });

        let result = AnalysisResult {
            priority,
            category,
            confidence,
            reasoning,
            nlp_insights: NlpInsights {
                sentiment,
                entities,
                tokens,
                time_indicators,
            },
        };

        debug!("Analysis result: {}", result.summary());

        DetailedAnalysis {
            result,
            priority_scores,
            category_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{PriorityLevel, TaskCategory};

    #[test]
    fn test_basic_analysis() {
        let analyzer = TaskAnalyzer::new();

        let result = analyzer.analyze("Pay electricity bill", Some("Due this week"));

        assert_eq!(result.category, TaskCategory::Finance);
        assert_eq!(result.priority, PriorityLevel::High);
        assert!(result.nlp_insights.time_indicators.contains(&"this week".to_string()));
    }

    #[test]
    fn test_missing_description_keeps_separator() {
        let analyzer = TaskAnalyzer::new();
        let (combined, text) = TaskAnalyzer::combine("Buy Milk", None);
        assert_eq!(combined, "Buy Milk ");
        assert_eq!(text, "buy milk ");

        let none = analyzer.analyze("Buy milk", None);
        let empty = analyzer.analyze("Buy milk", Some(""));
        assert_eq!(none, empty);
    }

    #[test]
    fn test_entities_keep_letter_case() {
        let analyzer = TaskAnalyzer::new();
        let result = analyzer.analyze("Call Jane Doe", Some("about the Acme Corp contract"));
        assert_eq!(
            result.nlp_insights.entities,
            vec!["Call Jane", "Acme Corp", "Acme Corp"]
        );
    }

    #[test]
    fn test_detailed_scores_cover_every_variant() {
        let analyzer = TaskAnalyzer::new();
        let detailed = analyzer.analyze_detailed("Book a flight", None);

        assert_eq!(detailed.priority_scores.scores.len(), 4);
        assert_eq!(detailed.category_scores.scores.len(), 8);
        assert_eq!(detailed.result.category, TaskCategory::Travel);
        assert_eq!(detailed.priority_scores.level, detailed.result.priority);
    }

    #[test]
    fn test_custom_vocabulary_instance() {
        let mut patterns = PatternSet::builtin().clone();
        patterns.priority.urgent.keywords = crate::brain::keywords::keywords(&["blocker"]).unwrap();
        let custom = TaskAnalyzer::with_patterns(patterns);

        let result = custom.analyze("Release blocker", None);
        assert_eq!(result.priority, PriorityLevel::Urgent);

        // the shared built-in analyzer is untouched
        let builtin = TaskAnalyzer::new().analyze("Release blocker", None);
        assert_eq!(builtin.priority, PriorityLevel::Medium);
    }
}
