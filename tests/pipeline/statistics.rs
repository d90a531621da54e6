//! Corpus and sentiment aggregates

use crate::common::*;
use ulasan::{get_sentiment_statistics, get_statistics, word_frequencies, SentimentLabel, WordCount};

#[test]
fn reduction_rate_scenario() {
    let records = vec![
        record_with_counts(10, 4, SentimentLabel::Neutral),
        record_with_counts(20, 6, SentimentLabel::Neutral),
    ];
    let stats = get_statistics(&records);
    assert_eq!(stats.avg_tokens_original, 15.0);
    assert_eq!(stats.avg_tokens_final, 5.0);
    assert_eq!(stats.reduction_rate, 66.67);
}

#[test]
fn percentages_round_exact_ties_to_even() {
    let mut records = vec![record_with_counts(1, 1, SentimentLabel::Positive)];
    records.extend((0..31).map(|_| record_with_counts(1, 1, SentimentLabel::Neutral)));

    let sentiment = get_sentiment_statistics(&records);
    assert_eq!(sentiment.positive_percentage, 3.12);
    assert_eq!(sentiment.neutral_percentage, 96.88);
}

#[test]
fn empty_batch_is_all_zero() {
    let corpus = get_statistics(&[]);
    assert_eq!(corpus.total_reviews, 0);
    assert_eq!(corpus.avg_tokens_original, 0.0);
    assert_eq!(corpus.avg_tokens_final, 0.0);
    assert_eq!(corpus.reduction_rate, 0.0);

    let sentiment = get_sentiment_statistics(&[]);
    assert_eq!(sentiment.total(), 0);
    assert_eq!(sentiment.positive_percentage, 0.0);
    assert_eq!(sentiment.neutral_percentage, 0.0);
    assert_eq!(sentiment.negative_percentage, 0.0);
}

#[test]
fn statistics_over_scenario_batch() {
    let records = sequential().preprocess_reviews(&SCENARIO_REVIEWS).unwrap();

    // tokens: 5, 0, 4; stemmed: 5, 0, 3
    let corpus = get_statistics(&records);
    assert_eq!(corpus.total_reviews, 3);
    assert_eq!(corpus.avg_tokens_original, 3.0);
    assert_eq!(corpus.avg_tokens_final, 2.67);
    assert_eq!(corpus.reduction_rate, 11.11);

    let sentiment = get_sentiment_statistics(&records);
    assert_eq!((sentiment.positive, sentiment.neutral, sentiment.negative), (1, 1, 1));
    assert_eq!(sentiment.positive_percentage, 33.33);
    let sum = sentiment.positive_percentage + sentiment.neutral_percentage + sentiment.negative_percentage;
    assert!((sum - 100.0).abs() <= 0.03);
}

#[test]
fn top_words_over_real_batch() {
    let records = sequential()
        .preprocess_reviews(&[
            "Pengiriman cepat, barang bagus",
            "Barang rusak, pengiriman lambat",
            "Barang sesuai",
        ])
        .unwrap();

    let top = word_frequencies(&records, 2);
    assert_eq!(top, vec![WordCount::new("barang", 3), WordCount::new("kirim", 2)]);
}

#[test]
fn report_bundles_everything() {
    let report = sequential().with_top_words(5).report(&SCENARIO_REVIEWS).unwrap();
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.corpus, get_statistics(&report.records));
    assert_eq!(report.sentiment, get_sentiment_statistics(&report.records));
    assert!(report.top_words.len() <= 5);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["records"][1]["sentiment_label"], "Netral");
    assert_eq!(json["corpus"]["reduction_rate"], 11.11);
}
