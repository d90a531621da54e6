//! Score → label thresholds

use ulasan_core::SentimentLabel;

/// Scores strictly above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores strictly below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Map a polarity score to its label.
///
/// The band `[-0.1, 0.1]`, both ends included, is neutral. NaN is neutral.
///
/// # Example
///
/// ```
/// use ulasan_sentiment::label_for;
/// use ulasan_core::SentimentLabel;
///
/// assert_eq!(label_for(0.5), SentimentLabel::Positive);
/// assert_eq!(label_for(0.1), SentimentLabel::Neutral);
/// assert_eq!(label_for(-0.11), SentimentLabel::Negative);
/// ```
pub fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
