//! Per-review result records
//!
//! A [`ResultRecord`] is produced once per input review and captures every
//! intermediate stage of preprocessing, so callers can show or export any
//! step without re-running the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SentimentLabel
// ============================================================================

/// Three-way polarity label
///
/// Serialized and displayed with the Indonesian names used in reports
/// (`Positif`, `Netral`, `Negatif`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Favorable review
    #[serde(rename = "Positif")]
    Positive,
    /// Near-zero polarity
    #[serde(rename = "Netral")]
    #[default]
    Neutral,
    /// Unfavorable review
    #[serde(rename = "Negatif")]
    Negative,
}

impl SentimentLabel {
    /// All labels in report order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Display name as used in reports and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positif",
            SentimentLabel::Neutral => "Netral",
            SentimentLabel::Negative => "Negatif",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ResultRecord
// ============================================================================

/// Outcome of preprocessing a single review
///
/// Invariants (upheld by the pipeline):
/// - `filtered.len() <= tokens.len()`
/// - `stemmed.len() == filtered.len()`
/// - `final_text == stemmed.join(" ")`
/// - `sentiment_label` is the threshold mapping of `sentiment_score`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Unmodified input text
    pub original: String,

    /// Lowercased text without URLs, symbols, digits or extra whitespace
    pub cleaned: String,

    /// Whitespace tokens of `cleaned`
    pub tokens: Vec<String>,

    /// `tokens` without stopwords, order preserved
    pub filtered: Vec<String>,

    /// One root form per `filtered` token
    pub stemmed: Vec<String>,

    /// `stemmed` joined with single spaces
    pub final_text: String,

    /// Polarity in [-1.0, 1.0]
    pub sentiment_score: f64,

    /// Label derived from `sentiment_score`
    pub sentiment_label: SentimentLabel,

    /// Set when processing this review failed and the record is degraded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ResultRecord {
    /// Degraded record for a review whose processing failed
    ///
    /// Keeps the original text; every derived field is empty and the
    /// sentiment is neutral.
    pub fn degraded(original: impl Into<String>, reason: impl Into<String>) -> Self {
        ResultRecord {
            original: original.into(),
            cleaned: String::new(),
            tokens: Vec::new(),
            filtered: Vec::new(),
            stemmed: Vec::new(),
            final_text: String::new(),
            sentiment_score: 0.0,
            sentiment_label: SentimentLabel::Neutral,
            failure: Some(reason.into()),
        }
    }

    /// True if this record is a degraded placeholder
    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    /// Token counts at each stage
    pub fn stage_counts(&self) -> StageCounts {
        StageCounts {
            original: self.tokens.len(),
            filtered: self.filtered.len(),
            stemmed: self.stemmed.len(),
        }
    }
}

/// Token counts after tokenization, stopword removal and stemming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageCounts {
    /// Tokens after tokenization
    pub original: usize,
    /// Tokens after stopword removal
    pub filtered: usize,
    /// Tokens after stemming
    pub stemmed: usize,
}
