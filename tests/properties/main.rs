//! Property Test Suite
//!
//! Invariants that hold for every input, checked with proptest.
//!
//! ```bash
//! cargo test --test properties
//! ```

#[path = "../common/mod.rs"]
mod common;

use common::*;
use proptest::prelude::*;
use ulasan::{
    clean_text, get_sentiment_statistics, get_statistics, label_for, LexiconScorer, SentimentLabel,
    SentimentScorer, StopwordSet,
};

const VOCABULARY: &[&str] = &[
    "barang", "bagus", "sekali", "pengiriman", "cepat", "produk", "rusak", "dan", "mengecewakan",
    "tidak", "sangat", "kurang", "yang", "pengirimannya", "kurirnya", "ramah", "buku-buku",
    "membeli", "diperbaiki", "ok", "mantap", "banget", "lambat", "sesuai", "harga", "murah",
];

fn review() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(VOCABULARY.to_vec()), 0..12).prop_map(|w| w.join(" ")),
        "[a-zA-Z0-9 .,!?:/_#@éÀ\\-]{0,80}",
        "(https?://|www\\.)?[a-z]{0,8}[0-9]{0,4}[a-z .]{0,20}",
    ]
}

fn labels() -> impl Strategy<Value = Vec<SentimentLabel>> {
    prop::collection::vec(
        prop::sample::select(SentimentLabel::ALL.to_vec()),
        1..200,
    )
}

proptest! {
    #[test]
    fn clean_text_is_a_fixed_point(text in review()) {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn record_stages_stay_aligned(text in review()) {
        let stopwords = StopwordSet::indonesian();
        let records = sequential().preprocess_reviews(&[text.as_str()]).unwrap();
        let record = &records[0];

        prop_assert!(record.failure.is_none());
        prop_assert!(record.filtered.len() <= record.tokens.len());
        prop_assert_eq!(record.stemmed.len(), record.filtered.len());
        prop_assert!(record.filtered.iter().all(|t| !stopwords.contains(t)));
        prop_assert_eq!(&record.final_text, &record.stemmed.join(" "));
        prop_assert!((-1.0..=1.0).contains(&record.sentiment_score));
        prop_assert_eq!(record.sentiment_label, label_for(record.sentiment_score));

        // filtered is an ordered subsequence of tokens
        let mut rest = record.tokens.iter();
        prop_assert!(record.filtered.iter().all(|f| rest.any(|t| t == f)));
    }

    #[test]
    fn parallel_matches_sequential(batch in prop::collection::vec(review(), 0..40)) {
        let seq = sequential().preprocess_reviews(&batch).unwrap();
        let par = parallel().preprocess_reviews(&batch).unwrap();
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn label_follows_thresholds(score in -1.0f64..=1.0) {
        let expected = if score > 0.1 {
            SentimentLabel::Positive
        } else if score < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(label_for(score), expected);
    }

    #[test]
    fn scorer_stays_in_range(text in review()) {
        let score = LexiconScorer::builtin().score(&clean_text(&text));
        prop_assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn percentages_sum_to_hundred(labels in labels()) {
        let records: Vec<_> = labels
            .iter()
            .map(|&label| record_with_counts(1, 1, label))
            .collect();
        let stats = get_sentiment_statistics(&records);

        prop_assert_eq!(stats.total(), records.len());
        let sum = stats.positive_percentage + stats.neutral_percentage + stats.negative_percentage;
        prop_assert!((sum - 100.0).abs() <= 0.03, "sum was {}", sum);
    }

    #[test]
    fn reduction_rate_is_bounded(batch in prop::collection::vec(review(), 1..30)) {
        let records = sequential().preprocess_reviews(&batch).unwrap();
        let stats = get_statistics(&records);
        prop_assert_eq!(stats.total_reviews, batch.len());
        prop_assert!((0.0..=100.0).contains(&stats.reduction_rate));
    }
}

#[test]
fn label_boundaries_are_neutral() {
    assert_eq!(label_for(0.1), SentimentLabel::Neutral);
    assert_eq!(label_for(-0.1), SentimentLabel::Neutral);
    assert_eq!(label_for(0.100001), SentimentLabel::Positive);
    assert_eq!(label_for(-0.100001), SentimentLabel::Negative);
}

#[test]
fn aggregates_never_divide_by_zero() {
    let empty_text = vec![record_with_counts(0, 0, SentimentLabel::Neutral); 4];
    let stats = get_statistics(&empty_text);
    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.reduction_rate, 0.0);
    assert!(stats.avg_tokens_original.is_finite());
}
