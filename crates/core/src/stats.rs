//! Corpus-level statistics types
//!
//! These are derived values, recomputed on demand from a batch of
//! [`ResultRecord`](crate::ResultRecord)s. They never cache anything.

use crate::record::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Round to two decimal places.
///
/// Works on the exact decimal expansion of `value`: exact ties go to the
/// even digit (`3.125` → `3.12`), and values just below a tie in binary
/// (`2.675` is stored as `2.67499…`) round down.
pub fn round2(value: f64) -> f64 {
    // float formatting is exact and rounds ties to even
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Token-count reduction metrics for a batch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of records in the batch
    pub total_reviews: usize,
    /// Mean token count before stopword removal, 2 decimals
    pub avg_tokens_original: f64,
    /// Mean token count after stemming, 2 decimals
    pub avg_tokens_final: f64,
    /// Percentage decrease from original to final average, 2 decimals
    pub reduction_rate: f64,
}

/// Sentiment label distribution for a batch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentStats {
    /// Records labeled positive
    pub positive: usize,
    /// Records labeled neutral
    pub neutral: usize,
    /// Records labeled negative
    pub negative: usize,
    /// Share of positive records, 2 decimals
    pub positive_percentage: f64,
    /// Share of neutral records, 2 decimals
    pub neutral_percentage: f64,
    /// Share of negative records, 2 decimals
    pub negative_percentage: f64,
}

impl SentimentStats {
    /// Count for one label
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Percentage for one label
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive_percentage,
            SentimentLabel::Neutral => self.neutral_percentage,
            SentimentLabel::Negative => self.negative_percentage,
        }
    }

    /// Total number of labeled records
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// One row of the word-frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Stemmed word
    pub word: String,
    /// Occurrences across the batch
    pub count: usize,
}

impl WordCount {
    /// Create a new word count
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        WordCount {
            word: word.into(),
            count,
        }
    }
}
