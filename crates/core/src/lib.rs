//! Core types for the ulasan review pipeline
//!
//! This crate defines the foundational types used throughout the system:
//! - ResultRecord: per-review output of every preprocessing stage
//! - SentimentLabel: three-way polarity label
//! - StageCounts: token counts per stage
//! - CorpusStats / SentimentStats / WordCount: batch-level statistics
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod stats;

pub use error::{Error, Result, Stage};
pub use record::{ResultRecord, SentimentLabel, StageCounts};
pub use stats::{round2, CorpusStats, SentimentStats, WordCount};
