//! Priority classification.
//!
//! Every level is scored independently as the sum of five signals (keyword,
//! time urgency, sentiment, intensity, negation) and the strictly highest
//! positive score wins. With no positive score the level stays `Medium`.
//!
//! Negation is a single flag for the whole text: a "not" anywhere suppresses
//! `Urgent`/`High`, even when it belongs to an unrelated clause.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::{keyword_score, Term};
use super::patterns::{PatternSet, PriorityPattern};

/// Bonus per extracted time indicator the level expects
const TIME_INDICATOR_SCORE: f64 = 2.0;
/// Bonus per intensity modifier present in the text
const INTENSITY_SCORE: f64 = 1.5;
/// Penalty applied to `Urgent` and `High` when the text is negated
const NEGATION_PENALTY: f64 = -3.0;
/// Bonus applied to `Low` when the text is negated
const NEGATION_BONUS: f64 = 2.0;

/// Urgency of a task. Each level is an independent scoring bucket; the
/// declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl PriorityLevel {
    /// All levels in declaration order
    pub const ALL: [PriorityLevel; 4] = [
        PriorityLevel::Urgent,
        PriorityLevel::High,
        PriorityLevel::Medium,
        PriorityLevel::Low,
    ];

    /// Returns a human-readable label for the level
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Urgent => "urgent",
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
        }
    }

    /// Conditional sentiment bonus for this level
    fn sentiment_bonus(&self, sentiment: f64) -> f64 {
        match self {
            PriorityLevel::Urgent if sentiment > 0.3 => 3.0,
            PriorityLevel::High if sentiment > 0.1 => 2.0,
            PriorityLevel::Low if sentiment < -0.1 => 2.0,
            _ => 0.0,
        }
    }

    fn negation_adjustment(&self) -> f64 {
        match self {
            PriorityLevel::Urgent | PriorityLevel::High => NEGATION_PENALTY,
            PriorityLevel::Low => NEGATION_BONUS,
            PriorityLevel::Medium => 0.0,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-signal score breakdown for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub level: PriorityLevel,
    pub keyword: f64,
    pub time_urgency: f64,
    pub sentiment: f64,
    pub intensity: f64,
    pub negation: f64,
    /// Sum of the five signals, accumulated in field order
    pub total: f64,
}

/// Result of priority classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityVerdict {
    /// Winning level
    pub level: PriorityLevel,
    /// Whether any negation word was found in the text
    pub negated: bool,
    /// One entry per level, in declaration order
    pub scores: Vec<PriorityScore>,
}

impl PriorityVerdict {
    pub fn score_for(&self, level: PriorityLevel) -> Option<&PriorityScore> {
        self.scores.iter().find(|s| s.level == level)
    }
}

/// Priority classifier over one vocabulary
pub struct PriorityClassifier<'a> {
    patterns: &'a PatternSet,
}

impl<'a> PriorityClassifier<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Whether the text contains any negation word (substring, whole text)
    pub fn is_negated(&self, text: &str) -> bool {
        self.patterns.negations.iter().any(|n| n.found_in(text))
    }

    fn score_level(
        &self,
        level: PriorityLevel,
        pattern: &PriorityPattern,
        text: &str,
        sentiment: f64,
        time_indicators: &[Term],
        negated: bool,
    ) -> PriorityScore {
        let keyword = keyword_score(text, &pattern.keywords);

        let time_urgency = time_indicators
            .iter()
            .filter(|found| pattern.time_indicators.contains(found))
            .map(|_| TIME_INDICATOR_SCORE)
            .fold(0.0, |acc, s| acc + s);

        let sentiment = level.sentiment_bonus(sentiment);

        let intensity = pattern
            .intensity_modifiers
            .iter()
            .filter(|m| m.found_in(text))
            .map(|_| INTENSITY_SCORE)
            .fold(0.0, |acc, s| acc + s);

        let negation = if negated {
            level.negation_adjustment()
        } else {
            0.0
        };

        let total = keyword + time_urgency + sentiment + intensity + negation;

        PriorityScore {
            level,
            keyword,
            time_urgency,
            sentiment,
            intensity,
            negation,
            total,
        }
    }

    /// Score every level against normalized `text` and pick the winner.
    pub fn classify(&self, text: &str, sentiment: f64, time_indicators: &[Term]) -> PriorityVerdict {
        let negated = self.is_negated(text);

        let scores: Vec<PriorityScore> = PriorityLevel::ALL
            .iter()
            .map(|&level| {
                self.score_level(
                    level,
                    self.patterns.priority.get(level),
                    text,
                    sentiment,
                    time_indicators,
                    negated,
                )
            })
            .collect();

        let mut best_level = PriorityLevel::default();
        let mut best_score = 0.0;
        for score in &scores {
            if score.total > best_score {
                best_score = score.total;
                best_level = score.level;
            }
        }

        PriorityVerdict {
            level: best_level,
            negated,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::entities::TimeIndicatorExtractor;

    fn classify(text: &str, sentiment: f64) -> PriorityVerdict {
        let patterns = PatternSet::builtin();
        let times = TimeIndicatorExtractor::new(patterns).extract(text);
        PriorityClassifier::new(patterns).classify(text, sentiment, &times)
    }

    #[test]
    fn test_urgent_keywords() {
        let verdict = classify("urgent: server down, fix asap ", 0.0);
        assert_eq!(verdict.level, PriorityLevel::Urgent);
    }

    #[test]
    fn test_high_keywords() {
        let verdict = classify("important and crucial review ", 0.0);
        assert_eq!(verdict.level, PriorityLevel::High);
    }

    #[test]
    fn test_no_signal_defaults_to_medium() {
        let verdict = classify("xyz ", 0.0);
        assert_eq!(verdict.level, PriorityLevel::Medium);
        assert!(verdict.scores.iter().all(|s| s.total == 0.0));
    }

    #[test]
    fn test_negation_suppresses_urgency() {
        let verdict = classify("this is not urgent can wait", 0.0);
        assert!(verdict.negated);
        assert_eq!(verdict.level, PriorityLevel::Low);

        let urgent = verdict.score_for(PriorityLevel::Urgent).unwrap();
        assert_eq!(urgent.negation, -3.0);
        let low = verdict.score_for(PriorityLevel::Low).unwrap();
        assert_eq!(low.negation, 2.0);
        let medium = verdict.score_for(PriorityLevel::Medium).unwrap();
        assert_eq!(medium.negation, 0.0);
    }

    #[test]
    fn test_negation_is_global_flag() {
        // Negation in an unrelated clause still suppresses urgency
        let verdict = classify("urgent fix, no coffee ", 0.0);
        assert!(verdict.negated);
        assert_ne!(verdict.level, PriorityLevel::Urgent);
    }

    #[test]
    fn test_time_indicator_adds_to_urgent() {
        let with_time = classify("submit report today ", 0.0);
        let without = classify("submit report ", 0.0);

        let a = with_time.score_for(PriorityLevel::Urgent).unwrap();
        let b = without.score_for(PriorityLevel::Urgent).unwrap();
        assert_eq!(a.time_urgency, 2.0);
        assert!(a.total > b.total);
    }

    #[test]
    fn test_sentiment_bonuses() {
        let positive = classify("xyz ", 0.5);
        assert_eq!(positive.score_for(PriorityLevel::Urgent).unwrap().sentiment, 3.0);
        assert_eq!(positive.score_for(PriorityLevel::High).unwrap().sentiment, 2.0);
        assert_eq!(positive.level, PriorityLevel::Urgent);

        let mild = classify("xyz ", 0.2);
        assert_eq!(mild.score_for(PriorityLevel::Urgent).unwrap().sentiment, 0.0);
        assert_eq!(mild.level, PriorityLevel::High);

        let negative = classify("xyz ", -0.2);
        assert_eq!(negative.level, PriorityLevel::Low);
    }

    #[test]
    fn test_intensity_modifiers() {
        // "very" is an intensity modifier for both urgent and high
        let verdict = classify("very ", 0.0);
        assert_eq!(verdict.score_for(PriorityLevel::Urgent).unwrap().intensity, 1.5);
        assert_eq!(verdict.score_for(PriorityLevel::High).unwrap().intensity, 1.5);
        // tie goes to the first declared level
        assert_eq!(verdict.level, PriorityLevel::Urgent);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(PriorityLevel::Urgent.to_string(), "urgent");
        assert_eq!(PriorityLevel::Low.label(), "low");
        assert_eq!(
            serde_json::to_string(&PriorityLevel::High).unwrap(),
            "\"high\""
        );
    }
}
