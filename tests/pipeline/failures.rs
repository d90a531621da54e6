//! Isolate-and-continue vs fail-fast

use std::sync::Arc;
use ulasan::{
    get_sentiment_statistics, get_statistics, Error, FailurePolicy, Pipeline, Resources,
    SentimentLabel, SentimentScorer, Stage, WordStemmer,
};

/// Scorer that panics on any text containing "ledak"
struct ExplodingScorer;

impl SentimentScorer for ExplodingScorer {
    fn score(&self, text: &str) -> f64 {
        if text.contains("ledak") {
            panic!("scorer exploded");
        }
        0.5
    }

    fn name(&self) -> &str {
        "exploding"
    }
}

/// Stemmer that panics on non-ASCII tokens
struct AsciiOnlyStemmer;

impl WordStemmer for AsciiOnlyStemmer {
    fn stem(&self, token: &str) -> String {
        assert!(token.is_ascii(), "non-ascii token {}", token);
        token.to_string()
    }

    fn name(&self) -> &str {
        "ascii_only"
    }
}

fn with_scorer(policy: FailurePolicy, parallel: bool) -> Pipeline {
    Pipeline::new(Resources::builtin().with_scorer(Arc::new(ExplodingScorer)))
        .with_policy(policy)
        .with_parallel(parallel)
}

#[test]
fn isolate_keeps_batch_and_marks_failed_review() {
    for parallel in [false, true] {
        let records = with_scorer(FailurePolicy::Isolate, parallel)
            .preprocess_reviews(&["barang bagus", "hp meledak", "kirim cepat"])
            .unwrap();

        assert_eq!(records.len(), 3);
        assert!(!records[0].is_degraded());
        assert!(records[1].is_degraded());
        assert!(!records[2].is_degraded());

        let failed = &records[1];
        assert_eq!(failed.original, "hp meledak");
        assert_eq!(failed.final_text, "");
        assert_eq!(failed.sentiment_label, SentimentLabel::Neutral);
        assert!(failed.failure.as_deref().unwrap().starts_with("score failed"));
    }
}

#[test]
fn degraded_records_count_in_statistics() {
    let records = with_scorer(FailurePolicy::Isolate, false)
        .preprocess_reviews(&["hp meledak", "barang bagus"])
        .unwrap();

    let corpus = get_statistics(&records);
    assert_eq!(corpus.total_reviews, 2);
    assert_eq!(corpus.avg_tokens_original, 1.0);

    let sentiment = get_sentiment_statistics(&records);
    assert_eq!(sentiment.neutral, 1);
    assert_eq!(sentiment.positive, 1);
}

#[test]
fn fail_fast_returns_lowest_index_failure() {
    for parallel in [false, true] {
        let err = with_scorer(FailurePolicy::FailFast, parallel)
            .preprocess_reviews(&["bagus", "bagus", "meledak", "ledakan", "bagus"])
            .unwrap_err();

        match err {
            Error::StageFailure { index, stage, reason } => {
                assert_eq!(index, 2);
                assert_eq!(stage, Stage::Score);
                assert_eq!(reason, "scorer exploded");
            }
            other => panic!("expected StageFailure, got {:?}", other),
        }
    }
}

#[test]
fn stage_is_attributed() {
    let pipeline = Pipeline::new(Resources::builtin().with_stemmer(Arc::new(AsciiOnlyStemmer)))
        .with_policy(FailurePolicy::FailFast)
        .with_parallel(false);

    let err = pipeline.preprocess_reviews(&["barang ok", "kopi café enak"]).unwrap_err();
    assert!(matches!(err, Error::StageFailure { index: 1, stage: Stage::Stem, .. }));
    assert!(err.to_string().contains("during stem"));
}

#[test]
fn no_failures_no_difference_between_policies() {
    let reviews = ["Barang bagus", "", "Kurir lambat"];
    let isolate = Pipeline::default()
        .with_policy(FailurePolicy::Isolate)
        .preprocess_reviews(&reviews)
        .unwrap();
    let fail_fast = Pipeline::default()
        .with_policy(FailurePolicy::FailFast)
        .preprocess_reviews(&reviews)
        .unwrap();
    assert_eq!(isolate, fail_fast);
}
