//! Statistics aggregation over a batch of records
//!
//! All functions are total: empty batches and zero averages produce zeros
//! rather than NaN or a panic.

use rustc_hash::FxHashMap;
use ulasan_core::{round2, CorpusStats, ResultRecord, SentimentLabel, SentimentStats, WordCount};

/// Token-count reduction metrics.
///
/// `reduction_rate` is computed from the unrounded averages and rounded
/// once at the end.
pub fn get_statistics(records: &[ResultRecord]) -> CorpusStats {
    let total = records.len();
    if total == 0 {
        return CorpusStats::default();
    }

    let original: usize = records.iter().map(|r| r.tokens.len()).sum();
    let stemmed: usize = records.iter().map(|r| r.stemmed.len()).sum();
    let avg_original = original as f64 / total as f64;
    let avg_final = stemmed as f64 / total as f64;

    let reduction_rate = if avg_original > 0.0 {
        round2(100.0 - (avg_final / avg_original * 100.0))
    } else {
        0.0
    };

    CorpusStats {
        total_reviews: total,
        avg_tokens_original: round2(avg_original),
        avg_tokens_final: round2(avg_final),
        reduction_rate,
    }
}

/// Label counts and percentages.
pub fn get_sentiment_statistics(records: &[ResultRecord]) -> SentimentStats {
    let mut stats = SentimentStats::default();
    for record in records {
        match record.sentiment_label {
            SentimentLabel::Positive => stats.positive += 1,
            SentimentLabel::Neutral => stats.neutral += 1,
            SentimentLabel::Negative => stats.negative += 1,
        }
    }

    let total = records.len();
    if total > 0 {
        let pct = |n: usize| round2(n as f64 / total as f64 * 100.0);
        stats.positive_percentage = pct(stats.positive);
        stats.neutral_percentage = pct(stats.neutral);
        stats.negative_percentage = pct(stats.negative);
    }
    stats
}

/// The `top_n` most common stemmed tokens.
///
/// Sorted by count, descending; equal counts keep the order in which the
/// words first appeared in the batch.
pub fn word_frequencies(records: &[ResultRecord], top_n: usize) -> Vec<WordCount> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<WordCount> = Vec::new();

    for word in records.iter().flat_map(|r| r.stemmed.iter()) {
        match index.get(word.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word, counts.len());
                counts.push(WordCount::new(word.clone(), 1));
            }
        }
    }

    // stable sort keeps first-occurrence order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}
