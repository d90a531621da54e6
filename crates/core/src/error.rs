//! Error types for the review pipeline
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage names, used to attribute per-review failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Case folding and cleaning
    Normalize,
    /// Whitespace tokenization
    Tokenize,
    /// Stopword removal
    FilterStopwords,
    /// Root-form reduction
    Stem,
    /// Polarity scoring and labeling
    Score,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Normalize => "normalize",
            Stage::Tokenize => "tokenize",
            Stage::FilterStopwords => "filter_stopwords",
            Stage::Stem => "stem",
            Stage::Score => "score",
        };
        f.write_str(name)
    }
}

/// Error types for the review pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading inputs, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No recognized review column, or the tabular source is unparseable
    #[error("Input format error: {reason}")]
    InputFormat {
        /// What was wrong with the input
        reason: String,
    },

    /// A single review failed while being processed
    ///
    /// Only surfaced under the fail-fast policy; the isolating policy turns
    /// this into a degraded record instead.
    #[error("Review {index} failed during {stage}: {reason}")]
    StageFailure {
        /// Position of the review in the input batch
        index: usize,
        /// Stage that was running when the failure happened
        stage: Stage,
        /// Failure description
        reason: String,
    },

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {reason}")]
    Config {
        /// What was wrong with the configuration
        reason: String,
    },

    /// A language resource (stopwords, dictionary, lexicon) failed to load
    #[error("Resource error: {reason}")]
    Resource {
        /// What was wrong with the resource
        reason: String,
    },

    /// CSV reading or writing failed
    #[error("CSV error: {reason}")]
    Csv {
        /// Underlying CSV failure
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::InputFormat`]
    pub fn input_format(reason: impl Into<String>) -> Self {
        Error::InputFormat {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::Config`]
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::Resource`]
    pub fn resource(reason: impl Into<String>) -> Self {
        Error::Resource {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::Csv`]
    pub fn csv(reason: impl Into<String>) -> Self {
        Error::Csv {
            reason: reason.into(),
        }
    }

    /// True if this error belongs to ingestion rather than processing
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InputFormat { .. } | Error::Csv { .. })
    }
}
