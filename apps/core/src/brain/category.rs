//! Category classification.
//!
//! Each scored category sums four signals: keywords, detected entities,
//! action verbs, and a few hard-coded contextual exclusions. `Other` is never
//! scored; it is what remains when nothing else reaches a positive score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::keyword_score;
use super::patterns::{CategoryPattern, PatternSet};

/// Bonus per entity that mentions one of the category's entity terms
const ENTITY_SCORE: f64 = 2.0;
/// Bonus per action verb present in the text
const ACTION_SCORE: f64 = 1.5;

/// Topical bucket of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Work,
    Personal,
    Health,
    Finance,
    Learning,
    Shopping,
    Travel,
    Home,
    #[default]
    Other,
}

impl TaskCategory {
    /// Categories that carry evidence, in declaration order
    pub const SCORED: [TaskCategory; 8] = [
        TaskCategory::Work,
        TaskCategory::Personal,
        TaskCategory::Health,
        TaskCategory::Finance,
        TaskCategory::Learning,
        TaskCategory::Shopping,
        TaskCategory::Travel,
        TaskCategory::Home,
    ];

    /// Returns a human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Personal => "personal",
            TaskCategory::Health => "health",
            TaskCategory::Finance => "finance",
            TaskCategory::Learning => "learning",
            TaskCategory::Shopping => "shopping",
            TaskCategory::Travel => "travel",
            TaskCategory::Home => "home",
            TaskCategory::Other => "other",
        }
    }

    /// Pairwise exclusions: a word that argues against this category
    fn context_adjustment(&self, text: &str) -> f64 {
        match self {
            TaskCategory::Work if text.contains("home") => -1.0,
            TaskCategory::Personal if text.contains("office") => -1.0,
            TaskCategory::Health if text.contains("work") => -0.5,
            _ => 0.0,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-signal score breakdown for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: TaskCategory,
    pub keyword: f64,
    pub entity: f64,
    pub action: f64,
    pub context: f64,
    pub total: f64,
}

/// Result of category classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub category: TaskCategory,
    /// One entry per scored category, in declaration order
    pub scores: Vec<CategoryScore>,
}

impl CategoryVerdict {
    pub fn score_for(&self, category: TaskCategory) -> Option<&CategoryScore> {
        self.scores.iter().find(|s| s.category == category)
    }
}

/// Category classifier over one vocabulary
pub struct CategoryClassifier<'a> {
    patterns: &'a PatternSet,
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    fn score_category(
        &self,
        category: TaskCategory,
        pattern: &CategoryPattern,
        text: &str,
        entities: &[String],
    ) -> CategoryScore {
        let keyword = keyword_score(text, &pattern.keywords);

        let entity = entities
            .iter()
            .filter(|found| {
                let found = found.to_lowercase();
                pattern.entities.iter().any(|e| e.found_in(&found))
            })
            .map(|_| ENTITY_SCORE)
            .fold(0.0, |acc, s| acc + s);

        let action = pattern
            .actions
            .iter()
            .filter(|a| a.found_in(text))
            .map(|_| ACTION_SCORE)
            .fold(0.0, |acc, s| acc + s);

        let context = category.context_adjustment(text);

        CategoryScore {
            category,
            keyword,
            entity,
            action,
            context,
            total: keyword + entity + action + context,
        }
    }

    /// Score every category against normalized `text` and the extracted
    /// entities, and pick the winner.
    pub fn classify(&self, text: &str, entities: &[String]) -> CategoryVerdict {
        let scores: Vec<CategoryScore> = TaskCategory::SCORED
            .iter()
            .map(|&category| {
                self.score_category(
                    category,
                    self.patterns.category.get(category),
                    text,
                    entities,
                )
            })
            .collect();

        let mut best_category = TaskCategory::default();
        let mut best_score = 0.0;
        for score in &scores {
            if score.total > best_score {
                best_score = score.total;
                best_category = score.category;
            }
        }

        CategoryVerdict {
            category: best_category,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, entities: &[&str]) -> CategoryVerdict {
        let entities: Vec<String> = entities.iter().map(|e| e.to_string()).collect();
        CategoryClassifier::new(PatternSet::builtin()).classify(text, &entities)
    }

    #[test]
    fn test_shopping() {
        let verdict = classify("buy groceries for dinner get ingredients", &[]);
        assert_eq!(verdict.category, TaskCategory::Shopping);

        let shopping = verdict.score_for(TaskCategory::Shopping).unwrap();
        // buy: 1 + 0.5 + 0.3 at start; actions buy and get
        assert!((shopping.keyword - 1.8).abs() < 1e-9);
        assert_eq!(shopping.action, 3.0);
    }

    #[test]
    fn test_work_and_health() {
        assert_eq!(
            classify("prepare the client presentation ", &[]).category,
            TaskCategory::Work
        );
        assert_eq!(
            classify("doctor appointment for annual checkup ", &[]).category,
            TaskCategory::Health
        );
    }

    #[test]
    fn test_no_evidence_is_other() {
        let verdict = classify("xyz ", &[]);
        assert_eq!(verdict.category, TaskCategory::Other);
        assert_eq!(verdict.scores.len(), 8);
    }

    #[test]
    fn test_entity_signal_is_case_insensitive() {
        let verdict = classify("xyz ", &["Acme Company"]);
        let work = verdict.score_for(TaskCategory::Work).unwrap();
        assert_eq!(work.entity, 2.0);
        assert_eq!(verdict.category, TaskCategory::Work);
    }

    #[test]
    fn test_each_entity_counts_once() {
        // "Bank Account" mentions two finance terms but is one entity
        let verdict = classify("xyz ", &["Bank Account", "Payment Portal"]);
        let finance = verdict.score_for(TaskCategory::Finance).unwrap();
        assert_eq!(finance.entity, 4.0);
    }

    #[test]
    fn test_context_exclusions() {
        let work = classify("work from home ", &[]);
        assert_eq!(work.score_for(TaskCategory::Work).unwrap().context, -1.0);

        let personal = classify("family dinner near the office ", &[]);
        assert_eq!(personal.score_for(TaskCategory::Personal).unwrap().context, -1.0);

        let health = classify("workout ", &[]);
        assert_eq!(health.score_for(TaskCategory::Health).unwrap().context, -0.5);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(TaskCategory::Shopping.to_string(), "shopping");
        assert_eq!(
            serde_json::from_str::<TaskCategory>("\"travel\"").unwrap(),
            TaskCategory::Travel
        );
    }
}
