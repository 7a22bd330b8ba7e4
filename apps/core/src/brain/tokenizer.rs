//! Word tokenization and lexicon sentiment.
//!
//! Tokens are the lower-cased alphanumeric runs of the text. Sentiment is the
//! plain sum of each token's lexicon weight; there is no stemming, so "delay"
//! and "delayed" are distinct entries.

use std::collections::BTreeMap;

/// Split text into lower-cased word tokens, ignoring punctuation.
///
/// Every character that is neither alphanumeric nor `_` separates tokens, so
/// "tonight's" yields "tonight" and "s".
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Polarity scorer over a fixed word lexicon
pub struct SentimentScorer<'a> {
    lexicon: &'a BTreeMap<String, f64>,
}

impl<'a> SentimentScorer<'a> {
    pub fn new(lexicon: &'a BTreeMap<String, f64>) -> Self {
        Self { lexicon }
    }

    /// Sum of lexicon weights over `tokens`, in token order.
    ///
    /// Seeded with `0.0` so a text without lexicon words scores positive zero.
    pub fn score(&self, tokens: &[String]) -> f64 {
        tokens
            .iter()
            .filter_map(|t| self.lexicon.get(t))
            .fold(0.0, |acc, w| acc + w)
    }
}
