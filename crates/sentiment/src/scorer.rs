//! Lexicon-based polarity scoring
//!
//! Every token found in the lexicon contributes one assessment. An
//! assessment is the word's polarity, scaled by a neighbouring intensifier
//! and flipped (at half strength) by a preceding negator. The text score is
//! the mean of all assessments, clamped to [-1, 1]. Text with no known words
//! scores 0.0.

use crate::label::label_for;
use crate::lexicon::Lexicon;
use rustc_hash::{FxHashMap, FxHashSet};
use ulasan_core::SentimentLabel;

/// Polarity multiplier applied after a negator
pub const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "tidak", "bukan", "tak", "gak", "ga", "nggak", "enggak", "kurang", "belum", "jangan", "not",
    "no", "never",
];

/// Intensifiers placed before the word they modify
const PRE_INTENSIFIERS: &[(&str, f64)] = &[
    ("sangat", 1.3),
    ("paling", 1.5),
    ("terlalu", 1.3),
    ("amat", 1.3),
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
];

/// Intensifiers placed after the word they modify (`bagus sekali`)
const POST_INTENSIFIERS: &[(&str, f64)] = &[("sekali", 1.3), ("banget", 1.3), ("bgt", 1.3)];

/// Maps text to a polarity score in [-1, 1]
pub trait SentimentScorer: Send + Sync {
    /// Score whitespace-separated text
    fn score(&self, text: &str) -> f64;

    /// Scorer name (for logging)
    fn name(&self) -> &str;

    /// Score and label in one step
    fn assess(&self, text: &str) -> (f64, SentimentLabel) {
        let score = self.score(text);
        (score, label_for(score))
    }
}

/// Lexicon scorer with negation and intensifier handling
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    negators: FxHashSet<&'static str>,
    pre_intensifiers: FxHashMap<&'static str, f64>,
    post_intensifiers: FxHashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconScorer {
    /// Scorer over the built-in lexicon
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Scorer over a custom lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negators: NEGATORS.iter().copied().collect(),
            pre_intensifiers: PRE_INTENSIFIERS.iter().copied().collect(),
            post_intensifiers: POST_INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Assessment for the lexicon word at `i`, or `None` if it is not one.
    ///
    /// A negator may sit directly before the word or before its
    /// pre-intensifier (`tidak sangat bagus`).
    fn assessment(&self, tokens: &[&str], i: usize) -> Option<f64> {
        let mut polarity = self.lexicon.get(tokens[i])?;

        let mut modifier_at = i;
        if let Some(weight) = i
            .checked_sub(1)
            .and_then(|p| self.pre_intensifiers.get(tokens[p]))
        {
            polarity *= weight;
            modifier_at -= 1;
        }

        if let Some(weight) = tokens.get(i + 1).and_then(|n| self.post_intensifiers.get(n)) {
            polarity *= weight;
        }

        if modifier_at
            .checked_sub(1)
            .is_some_and(|p| self.negators.contains(tokens[p]))
        {
            polarity *= NEGATION_FACTOR;
        }

        Some(polarity.clamp(-1.0, 1.0))
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let (sum, count) = (0..tokens.len())
            .filter_map(|i| self.assessment(&tokens, i))
            .fold((0.0, 0usize), |(sum, count), a| (sum + a, count + 1));

        if count == 0 {
            return 0.0;
        }
        (sum / count as f64).clamp(-1.0, 1.0)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
