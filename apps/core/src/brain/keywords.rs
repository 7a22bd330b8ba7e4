//! Keyword matching shared by the priority and category classifiers.
//!
//! A keyword hit is scored in three tiers: a plain substring hit, a bonus when
//! the keyword also stands as a whole word, and a bonus when it sits at the very
//! start or end of the text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Base score for a substring hit
const SUBSTRING_SCORE: f64 = 1.0;
/// Bonus when the hit is bounded by word boundaries on both sides
const WORD_BOUNDARY_BONUS: f64 = 0.5;
/// Bonus when the text starts or ends with the keyword
const EDGE_POSITION_BONUS: f64 = 0.3;

/// A single lower-cased vocabulary entry.
///
/// Terms are matched by substring containment against normalized text, so
/// they are stored lower-cased and may never be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term(String);

impl Term {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AppError::Validation(
                "vocabulary entries must not be blank".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against already-normalized text
    pub fn found_in(&self, text: &str) -> bool {
        text.contains(self.0.as_str())
    }
}

impl TryFrom<String> for Term {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.0
    }
}

/// A scoring keyword: a [`Term`] plus its precompiled word-boundary matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword {
    term: Term,
    bounded: Regex,
}

impl Keyword {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let term = Term::new(raw)?;
        // ASCII word boundaries: an accented letter next to the keyword still ends the word
        let bounded = Regex::new(&format!(
            r"(?-u:\b){}(?-u:\b)",
            regex::escape(term.as_str())
        ))?;
        Ok(Self { term, bounded })
    }

    pub fn as_str(&self) -> &str {
        self.term.as_str()
    }

    pub fn found_in(&self, text: &str) -> bool {
        self.term.found_in(text)
    }

    /// Score this keyword against normalized text; zero when absent.
    pub fn score(&self, text: &str) -> f64 {
        if !self.found_in(text) {
            return 0.0;
        }

        let mut score = SUBSTRING_SCORE;
        if self.bounded.is_match(text) {
            score += WORD_BOUNDARY_BONUS;
        }
        if text.starts_with(self.as_str()) || text.ends_with(self.as_str()) {
            score += EDGE_POSITION_BONUS;
        }
        score
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl TryFrom<String> for Keyword {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.term.into()
    }
}

/// Sum the scores of every keyword in `keywords` against `text`.
///
/// Scores accumulate across keywords in list order, so a text that hits many
/// keywords of one pattern outscores a text that hits few.
pub fn keyword_score(text: &str, keywords: &[Keyword]) -> f64 {
    keywords.iter().fold(0.0, |acc, k| acc + k.score(text))
}

/// Keywords that occur anywhere in `text`, in list order
pub fn matched_keywords<'a>(text: &str, keywords: &'a [Keyword]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|k| k.found_in(text))
        .map(|k| k.as_str())
        .collect()
}

/// Convenience for building static vocabularies
pub(crate) fn keywords(words: &[&str]) -> Result<Vec<Keyword>, AppError> {
    words.iter().map(|w| Keyword::new(w)).collect()
}

pub(crate) fn terms(words: &[&str]) -> Result<Vec<Term>, AppError> {
    words.iter().map(|w| Term::new(w)).collect()
}
