//! Polarity scoring for preprocessed review text
//!
//! [`LexiconScorer`] averages lexicon polarities over the stemmed tokens of
//! a review, with negation and intensifier handling; [`label_for`] maps the
//! score to a three-way label through fixed thresholds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod lexicon;
pub mod scorer;

pub use label::{label_for, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use lexicon::Lexicon;
pub use scorer::{LexiconScorer, SentimentScorer, NEGATION_FACTOR};
