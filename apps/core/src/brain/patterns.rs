//! Vocabulary tables.
//!
//! A [`PatternSet`] is the complete, immutable vocabulary an analyzer scores
//! with: one pattern record per priority level and per category, the time
//! vocabulary, the negation words and the sentiment lexicon. Tables are keyed
//! by struct field and reached through a `match`, so every variant always has
//! exactly one record.
//!
//! The built-in set is compiled once per process. Custom sets are loaded from
//! JSON; omitted optional sections fall back to the built-in ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

use super::category::TaskCategory;
use super::keywords::{keywords, terms, Keyword, Term};
use super::priority::PriorityLevel;
use crate::error::AppError;

/// Signals that raise one priority level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorityPattern {
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub time_indicators: Vec<Term>,
    #[serde(default)]
    pub intensity_modifiers: Vec<Term>,
}

/// Signals that raise one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPattern {
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub entities: Vec<Term>,
    #[serde(default)]
    pub actions: Vec<Term>,
}

/// One [`PriorityPattern`] per [`PriorityLevel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityTable {
    pub urgent: PriorityPattern,
    pub high: PriorityPattern,
    pub medium: PriorityPattern,
    pub low: PriorityPattern,
}

impl PriorityTable {
    pub fn get(&self, level: PriorityLevel) -> &PriorityPattern {
        match level {
            PriorityLevel::Urgent => &self.urgent,
            PriorityLevel::High => &self.high,
            PriorityLevel::Medium => &self.medium,
            PriorityLevel::Low => &self.low,
        }
    }

    /// Longest keyword list across all levels
    pub fn max_keyword_count(&self) -> usize {
        PriorityLevel::ALL
            .iter()
            .map(|&l| self.get(l).keywords.len())
            .max()
            .unwrap_or(0)
    }
}

/// One [`CategoryPattern`] per [`TaskCategory`]; `other` is empty by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub work: CategoryPattern,
    pub personal: CategoryPattern,
    pub health: CategoryPattern,
    pub finance: CategoryPattern,
    pub learning: CategoryPattern,
    pub shopping: CategoryPattern,
    pub travel: CategoryPattern,
    pub home: CategoryPattern,
    #[serde(default)]
    pub other: CategoryPattern,
}

impl CategoryTable {
    pub fn get(&self, category: TaskCategory) -> &CategoryPattern {
        match category {
            TaskCategory::Work => &self.work,
            TaskCategory::Personal => &self.personal,
            TaskCategory::Health => &self.health,
            TaskCategory::Finance => &self.finance,
            TaskCategory::Learning => &self.learning,
            TaskCategory::Shopping => &self.shopping,
            TaskCategory::Travel => &self.travel,
            TaskCategory::Home => &self.home,
            TaskCategory::Other => &self.other,
        }
    }

    /// Longest keyword list across the scored categories
    pub fn max_keyword_count(&self) -> usize {
        TaskCategory::SCORED
            .iter()
            .map(|&c| self.get(c).keywords.len())
            .max()
            .unwrap_or(0)
    }
}

/// Complete vocabulary for one analyzer instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub priority: PriorityTable,
    pub category: CategoryTable,
    #[serde(default = "default_time_vocabulary")]
    pub time_vocabulary: Vec<Term>,
    #[serde(default = "default_negations")]
    pub negations: Vec<Term>,
    #[serde(default = "default_lexicon")]
    pub lexicon: BTreeMap<String, f64>,
}

const TIME_VOCABULARY: &[&str] = &[
    "today",
    "tomorrow",
    "yesterday",
    "now",
    "soon",
    "later",
    "asap",
    "this week",
    "next week",
    "this month",
    "next month",
    "urgently",
    "immediately",
    "promptly",
    "quickly",
];

const NEGATIONS: &[&str] = &["not", "no", "never", "isn't", "aren't", "don't", "doesn't"];

/// Word polarity weights on the AFINN scale (-5..=5) divided by 5,
/// positive = favorable tone
const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("accomplish", 0.4),
    ("accomplished", 0.4),
    ("adventure", 0.4),
    ("agree", 0.2),
    ("amazing", 0.8),
    ("appreciate", 0.4),
    ("appreciated", 0.4),
    ("awesome", 0.8),
    ("beautiful", 0.6),
    ("best", 0.6),
    ("better", 0.4),
    ("brilliant", 0.8),
    ("calm", 0.4),
    ("celebrate", 0.6),
    ("cheer", 0.4),
    ("comfortable", 0.4),
    ("confident", 0.4),
    ("congratulations", 0.4),
    ("cool", 0.2),
    ("creative", 0.4),
    ("delight", 0.6),
    ("delighted", 0.6),
    ("eager", 0.4),
    ("easy", 0.2),
    ("effective", 0.4),
    ("efficient", 0.4),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoying", 0.4),
    ("excellent", 0.6),
    ("excited", 0.6),
    ("exciting", 0.6),
    ("fabulous", 0.8),
    ("fantastic", 0.8),
    ("favorite", 0.4),
    ("fine", 0.4),
    ("fresh", 0.2),
    ("friendly", 0.4),
    ("fun", 0.8),
    ("generous", 0.4),
    ("glad", 0.6),
    ("good", 0.6),
    ("grateful", 0.6),
    ("great", 0.6),
    ("happy", 0.6),
    ("healthy", 0.4),
    ("helpful", 0.4),
    ("hope", 0.4),
    ("hopeful", 0.4),
    ("important", 0.4),
    ("impressive", 0.6),
    ("improve", 0.4),
    ("inspired", 0.4),
    ("interesting", 0.4),
    ("joy", 0.6),
    ("kind", 0.4),
    ("like", 0.4),
    ("love", 0.6),
    ("lovely", 0.6),
    ("lucky", 0.6),
    ("motivated", 0.4),
    ("nice", 0.6),
    ("optimistic", 0.4),
    ("outstanding", 1.0),
    ("peaceful", 0.4),
    ("perfect", 0.6),
    ("pleasant", 0.6),
    ("pleased", 0.6),
    ("positive", 0.4),
    ("proud", 0.4),
    ("recommend", 0.4),
    ("relaxed", 0.4),
    ("satisfied", 0.4),
    ("smile", 0.4),
    ("succeed", 0.6),
    ("success", 0.4),
    ("successful", 0.6),
    ("superb", 1.0),
    ("support", 0.4),
    ("sweet", 0.4),
    ("terrific", 0.8),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("thrilled", 1.0),
    ("useful", 0.4),
    ("welcome", 0.4),
    ("win", 0.8),
    ("winner", 0.8),
    ("wonderful", 0.8),
    ("worth", 0.4),
    ("wow", 0.8),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("afraid", -0.4),
    ("angry", -0.6),
    ("annoyed", -0.4),
    ("annoying", -0.4),
    ("anxious", -0.4),
    ("awful", -0.6),
    ("bad", -0.6),
    ("bored", -0.4),
    ("boring", -0.6),
    ("broken", -0.2),
    ("cancel", -0.2),
    ("cancelled", -0.2),
    ("complain", -0.4),
    ("concerned", -0.4),
    ("confused", -0.4),
    ("crash", -0.4),
    ("crisis", -0.6),
    ("damage", -0.6),
    ("damaged", -0.6),
    ("delay", -0.2),
    ("delayed", -0.4),
    ("difficult", -0.2),
    ("dirty", -0.4),
    ("disappointed", -0.4),
    ("disappointing", -0.4),
    ("disaster", -0.4),
    ("disgusting", -0.6),
    ("error", -0.4),
    ("exhausted", -0.4),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("fear", -0.4),
    ("frustrated", -0.4),
    ("frustrating", -0.4),
    ("guilty", -0.6),
    ("hate", -0.6),
    ("headache", -0.4),
    ("horrible", -0.6),
    ("hurt", -0.4),
    ("ill", -0.4),
    ("issue", -0.2),
    ("lonely", -0.4),
    ("lost", -0.6),
    ("mess", -0.4),
    ("miss", -0.4),
    ("missed", -0.4),
    ("mistake", -0.4),
    ("nervous", -0.4),
    ("overwhelmed", -0.4),
    ("pain", -0.4),
    ("painful", -0.4),
    ("panic", -0.6),
    ("pathetic", -0.4),
    ("poor", -0.4),
    ("problem", -0.4),
    ("ridiculous", -0.6),
    ("rude", -0.4),
    ("sad", -0.4),
    ("scared", -0.4),
    ("sick", -0.4),
    ("sorry", -0.2),
    ("stress", -0.2),
    ("stressful", -0.4),
    ("stupid", -0.4),
    ("tedious", -0.4),
    ("terrible", -0.6),
    ("tired", -0.4),
    ("trouble", -0.4),
    ("ugly", -0.6),
    ("unfortunately", -0.4),
    ("unhappy", -0.4),
    ("useless", -0.4),
    ("waste", -0.2),
    ("weak", -0.4),
    ("worried", -0.6),
    ("worry", -0.6),
    ("worse", -0.6),
    ("worst", -0.6),
    ("wrong", -0.4),
];

fn default_time_vocabulary() -> Vec<Term> {
    BUILTIN.time_vocabulary.clone()
}

fn default_negations() -> Vec<Term> {
    BUILTIN.negations.clone()
}

fn default_lexicon() -> BTreeMap<String, f64> {
    BUILTIN.lexicon.clone()
}

// NOTE: expect() is acceptable here, the built-in vocabulary is a compile-time constant
static BUILTIN: LazyLock<PatternSet> =
    LazyLock::new(|| build_builtin().expect("Invalid built-in vocabulary"));

fn priority(kw: &[&str], time: &[&str], intensity: &[&str]) -> Result<PriorityPattern, AppError> {
    Ok(PriorityPattern {
        keywords: keywords(kw)?,
        time_indicators: terms(time)?,
        intensity_modifiers: terms(intensity)?,
    })
}

fn category(kw: &[&str], entities: &[&str], actions: &[&str]) -> Result<CategoryPattern, AppError> {
    Ok(CategoryPattern {
        keywords: keywords(kw)?,
        entities: terms(entities)?,
        actions: terms(actions)?,
    })
}

fn build_builtin() -> Result<PatternSet, AppError> {
    let priority = PriorityTable {
        urgent: priority(
            &[
                "urgent", "asap", "emergency", "critical", "deadline", "due today", "immediate",
                "now", "rush",
            ],
            &["today", "now", "immediately", "asap", "right away"],
            &["very", "extremely", "absolutely", "completely"],
        )?,
        high: priority(
            &[
                "important", "priority", "high", "top", "main", "key", "essential", "crucial",
                "vital", "significant",
            ],
            &["this week", "soon", "quickly", "promptly"],
            &["very", "really", "quite"],
        )?,
        medium: priority(
            &["normal", "regular", "standard", "usual", "typical", "moderate"],
            &["this month", "when possible", "sometime"],
            &["kind of", "sort of", "maybe"],
        )?,
        low: priority(
            &[
                "low", "minor", "optional", "when possible", "sometime", "later", "low priority",
                "not urgent", "can wait",
            ],
            &["later", "sometime", "when convenient", "no rush"],
            &["not very", "hardly", "barely"],
        )?,
    };

    let category = CategoryTable {
        work: category(
            &[
                "work", "job", "office", "meeting", "report", "presentation", "project",
                "deadline", "client", "customer",
            ],
            &["company", "business", "professional", "team", "colleague", "boss", "manager"],
            &["submit", "review", "approve", "present", "discuss", "plan"],
        )?,
        personal: category(
            &[
                "personal", "family", "friend", "birthday", "anniversary", "celebration",
                "party", "gift",
            ],
            &["family", "friend", "relationship", "dating", "marriage", "kids"],
            &["celebrate", "visit", "call", "meet", "gift"],
        )?,
        health: category(
            &[
                "health", "medical", "doctor", "appointment", "checkup", "medicine", "exercise",
                "workout",
            ],
            &["doctor", "hospital", "clinic", "gym", "pharmacy"],
            &["exercise", "workout", "diet", "sleep", "rest"],
        )?,
        finance: category(
            &[
                "finance", "money", "bill", "payment", "budget", "expense", "income", "bank",
                "account",
            ],
            &["bank", "account", "bill", "payment", "investment"],
            &["pay", "save", "invest", "budget", "spend"],
        )?,
        learning: category(
            &[
                "learn", "study", "course", "training", "education", "skill", "tutorial", "book",
                "reading",
            ],
            &["course", "book", "tutorial", "training", "skill"],
            &["learn", "study", "practice", "improve", "develop", "master"],
        )?,
        shopping: category(
            &[
                "buy", "purchase", "shop", "shopping", "order", "grocery", "clothes",
                "electronics",
            ],
            &["store", "shop", "market", "mall", "online"],
            &["buy", "purchase", "order", "get", "find"],
        )?,
        travel: category(
            &[
                "travel", "trip", "vacation", "flight", "hotel", "booking", "reservation",
                "journey",
            ],
            &["flight", "hotel", "destination", "vacation", "trip"],
            &["book", "reserve", "plan", "visit", "explore"],
        )?,
        home: category(
            &["home", "house", "cleaning", "maintenance", "repair", "decorate", "organize"],
            &["house", "home", "room", "garden", "kitchen"],
            &["clean", "organize", "decorate", "repair", "maintain"],
        )?,
        other: CategoryPattern::default(),
    };

    let lexicon = POSITIVE_WORDS
        .iter()
        .chain(NEGATIVE_WORDS)
        .map(|&(word, weight)| (word.to_string(), weight))
        .collect();

    Ok(PatternSet {
        priority,
        category,
        time_vocabulary: terms(TIME_VOCABULARY)?,
        negations: terms(NEGATIONS)?,
        lexicon,
    })
}

impl PatternSet {
    /// The vocabulary shipped with the crate, compiled on first use
    pub fn builtin() -> &'static PatternSet {
        &BUILTIN
    }

    /// Parse and validate a vocabulary from JSON text
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let patterns: PatternSet = serde_json::from_str(json)?;
        patterns.validate()?;
        Ok(patterns)
    }

    /// Load and validate a vocabulary file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let patterns = Self::from_json(&json)?;
        info!(
            "Loaded vocabulary from {:?}: {} time indicators, {} lexicon entries",
            path,
            patterns.time_vocabulary.len(),
            patterns.lexicon.len()
        );
        Ok(patterns)
    }

    /// Pretty JSON rendering, suitable as a starting point for a custom file
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that deserialization alone cannot enforce.
    ///
    /// Blank entries are already rejected while parsing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.priority.max_keyword_count() == 0 {
            return Err(AppError::Validation(
                "at least one priority level needs keywords".to_string(),
            ));
        }
        if self.category.max_keyword_count() == 0 {
            return Err(AppError::Validation(
                "at least one category needs keywords".to_string(),
            ));
        }
        for (word, weight) in &self.lexicon {
            if word.trim().is_empty() || *word != word.to_lowercase() {
                return Err(AppError::Validation(format!(
                    "lexicon word {:?} must be non-blank and lower-case",
                    word
                )));
            }
            if !weight.is_finite() {
                return Err(AppError::Validation(format!(
                    "lexicon weight for {:?} must be finite",
                    word
                )));
            }
        }
        Ok(())
    }
}
