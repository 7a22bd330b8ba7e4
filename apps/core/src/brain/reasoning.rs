//! Human-readable explanation of a classification.

use super::category::TaskCategory;
use super::keywords::matched_keywords;
use super::patterns::PatternSet;
use super::priority::PriorityLevel;

/// Sentiment lines are only emitted beyond this magnitude
const SENTIMENT_REPORT_THRESHOLD: f64 = 0.3;

/// Everything the reasoning lines are rendered from
#[derive(Debug, Clone, Copy)]
pub struct ReasoningInput<'a> {
    pub text: &'a str,
    pub priority: PriorityLevel,
    pub category: TaskCategory,
    pub sentiment: f64,
    pub entities: &'a [String],
    pub time_indicators: &'a [String],
}

/// Renders contributing signals into an ordered explanation
pub struct ReasoningGenerator<'a> {
    patterns: &'a PatternSet,
}

impl<'a> ReasoningGenerator<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Explanation lines in fixed order: priority keywords, time urgency,
    /// sentiment, category keywords, entities. Never empty.
    pub fn generate(&self, input: &ReasoningInput<'_>) -> Vec<String> {
        let mut reasoning = Vec::new();

        let priority_keywords =
            matched_keywords(input.text, &self.patterns.priority.get(input.priority).keywords);
        if !priority_keywords.is_empty() {
            reasoning.push(format!(
                "Priority set to {} based on keywords: {}",
                input.priority,
                priority_keywords.join(", ")
            ));
        }

        if !input.time_indicators.is_empty() {
            reasoning.push(format!(
                "Time urgency detected: {}",
                input.time_indicators.join(", ")
            ));
        }

        if input.sentiment.abs() > SENTIMENT_REPORT_THRESHOLD {
            let tone = if input.sentiment > 0.0 {
                "positive"
            } else {
                "negative"
            };
            reasoning.push(format!(
                "Sentiment analysis: {} (score: {:.2})",
                tone, input.sentiment
            ));
        }

        let category_keywords =
            matched_keywords(input.text, &self.patterns.category.get(input.category).keywords);
        if !category_keywords.is_empty() {
            reasoning.push(format!(
                "Category set to {} based on keywords: {}",
                input.category,
                category_keywords.join(", ")
            ));
        }

        if !input.entities.is_empty() {
            reasoning.push(format!("Entities detected: {}", input.entities.join(", ")));
        }

        if reasoning.is_empty() {
            reasoning.push(format!(
                "Using default priority ({}) and category ({})",
                input.priority, input.category
            ));
        }

        reasoning
    }
}
