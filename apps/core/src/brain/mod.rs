//! # Brain Module
//!
//! Deterministic, rule-based task analysis for TaskSense.
//! Infers a priority and a category from a task's title and description,
//! with a bounded confidence and an explanation trail. No model, no I/O.
//!
//! ## Components
//! - `tokenizer`: word tokens and lexicon sentiment
//! - `entities`: capitalization-based entities and time indicators
//! - `keywords`: shared keyword scoring
//! - `patterns`: immutable vocabulary tables
//! - `priority` / `category`: per-axis classifiers
//! - `confidence` / `reasoning`: result scoring and explanation
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod category;
pub mod confidence;
pub mod entities;
pub mod keywords;
pub mod patterns;
pub mod priority;
pub mod reasoning;
pub mod tokenizer;

// Re-export main types for convenience
pub use analysis::{AnalysisResult, NlpInsights};
pub use analyzer::{DetailedAnalysis, TaskAnalyzer};
pub use category::{CategoryClassifier, CategoryScore, CategoryVerdict, TaskCategory};
pub use confidence::ConfidenceCalculator;
pub use entities::{EntityExtractor, TimeIndicatorExtractor};
pub use keywords::{keyword_score, Keyword, Term};
pub use patterns::{CategoryPattern, CategoryTable, PatternSet, PriorityPattern, PriorityTable};
pub use priority::{PriorityClassifier, PriorityLevel, PriorityScore, PriorityVerdict};
pub use reasoning::{ReasoningGenerator, ReasoningInput};
pub use tokenizer::{tokenize, SentimentScorer};
