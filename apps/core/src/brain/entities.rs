//! Entity and time-indicator extraction.
//!
//! Entities are found with three crude capitalization patterns, not a
//! dictionary. Any two consecutive capitalized words count as a name, so
//! "Project Alpha" is reported by both the name and the project pattern.
//! Entity extraction therefore needs the case-preserved text.

use regex::Regex;
use std::sync::LazyLock;

use super::keywords::Term;
use super::patterns::PatternSet;

// Compile patterns once at startup
// NOTE: expect() is acceptable here, the patterns are compile-time constants
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("Invalid regex: capitalized name pattern")
});

static ORGANIZATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ (?:Inc|Corp|LLC|Ltd|Company)\b")
        .expect("Invalid regex: organization suffix pattern")
});

static PROJECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Project|Task|Initiative) [A-Z][a-z]+\b")
        .expect("Invalid regex: project reference pattern")
});

/// Capitalization-based entity extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract entities from case-preserved text.
    ///
    /// Names come first, then organizations, then project references, each
    /// group in order of appearance. Duplicates are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        [&*NAME_PATTERN, &*ORGANIZATION_PATTERN, &*PROJECT_PATTERN]
            .iter()
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Fixed-vocabulary time-indicator extractor
pub struct TimeIndicatorExtractor<'a> {
    vocabulary: &'a [Term],
}

impl<'a> TimeIndicatorExtractor<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self {
            vocabulary: &patterns.time_vocabulary,
        }
    }

    /// Vocabulary entries contained in normalized `text`, in vocabulary order
    pub fn extract(&self, text: &str) -> Vec<Term> {
        self.vocabulary
            .iter()
            .filter(|t| t.found_in(text))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_project() {
        let entities =
            EntityExtractor::new().extract("Meeting with John Smith about Project Alpha ");
        assert_eq!(entities, vec!["John Smith", "Project Alpha", "Project Alpha"]);
    }

    #[test]
    fn test_organization_suffix() {
        let entities = EntityExtractor::new().extract("call acme about the Globex Corp invoice");
        // also a two-capitalized-word hit
        assert_eq!(entities, vec!["Globex Corp", "Globex Corp"]);
    }

    #[test]
    fn test_lowercase_text_has_no_entities() {
        let entities = EntityExtractor::new().extract("meeting with john smith about project alpha");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_all_caps_words_are_not_names() {
        let entities = EntityExtractor::new().extract("URGENT MEETING today");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let entities = EntityExtractor::new().extract("Jane Doe called. Jane Doe again.");
        assert_eq!(entities, vec!["Jane Doe", "Jane Doe"]);
    }

    #[test]
    fn test_time_indicators_follow_vocabulary_order() {
        let extractor = TimeIndicatorExtractor::new(PatternSet::builtin());
        let found: Vec<String> = extractor
            .extract("finish this week, start today ")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(found, vec!["today", "this week"]);
    }

    #[test]
    fn test_time_indicators_are_substrings() {
        let extractor = TimeIndicatorExtractor::new(PatternSet::builtin());
        let found: Vec<String> = extractor
            .extract("snowfall forecast ")
            .into_iter()
            .map(String::from)
            .collect();
        // "now" inside "snowfall"
        assert_eq!(found, vec!["now"]);
    }

    #[test]
    fn test_no_time_indicators() {
        let extractor = TimeIndicatorExtractor::new(PatternSet::builtin());
        assert!(extractor.extract("xyz ").is_empty());
    }
}
