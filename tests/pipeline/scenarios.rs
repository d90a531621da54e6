//! Documented input → record examples

use crate::common::*;
use ulasan::{clean_text, SentimentLabel};

#[test]
fn scenario_batch_of_three() {
    let records = sequential().preprocess_reviews(&SCENARIO_REVIEWS).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.original, SCENARIO_REVIEWS[0]);
    assert_eq!(first.final_text, "barang bagus sekali kirim cepat");
    assert_eq!(first.sentiment_label, SentimentLabel::Positive);

    let empty = &records[1];
    assert!(empty.tokens.is_empty());
    assert!(empty.filtered.is_empty());
    assert!(empty.stemmed.is_empty());
    assert_eq!(empty.final_text, "");
    assert_eq!(empty.sentiment_score, 0.0);
    assert_eq!(empty.sentiment_label, SentimentLabel::Neutral);
    assert_eq!(empty.sentiment_label.to_string(), "Netral");

    let last = &records[2];
    assert_eq!(last.filtered, vec!["produk", "rusak", "mengecewakan"]);
    assert_eq!(last.final_text, "produk rusak kecewa");
    assert_eq!(last.sentiment_label, SentimentLabel::Negative);
}

#[test]
fn url_and_punctuation_only_review_is_empty() {
    let records = sequential()
        .preprocess_reviews(&["http://example.com", "!!! ... ???", "www.toko.id, 12345"])
        .unwrap();

    for record in &records {
        assert_eq!(record.cleaned, "");
        assert!(record.tokens.is_empty());
        assert!(record.filtered.is_empty());
        assert!(record.stemmed.is_empty());
        assert_eq!(record.sentiment_label, SentimentLabel::Neutral);
    }
}

#[test]
fn normalization_steps() {
    assert_eq!(clean_text("  HARGA Rp50.000,- MURAH!!  "), "harga rp murah");
    assert_eq!(clean_text("cek https://shopee.co.id/x ya"), "cek ya");
    assert_eq!(clean_text("barang_ori"), "barang_ori");
}

#[test]
fn stemmed_tokens_align_with_filtered() {
    let records = parallel()
        .preprocess_reviews(&["Pengirimannya lambat, kurirnya tidak ramah", "Belajar membeli buku-buku"])
        .unwrap();

    for record in &records {
        assert_eq!(record.stemmed.len(), record.filtered.len());
        assert!(record.filtered.len() <= record.tokens.len());
        assert_eq!(record.final_text, record.stemmed.join(" "));
    }
    // '-' is a symbol to the normalizer, so the halves arrive as two tokens
    assert_eq!(records[1].stemmed, vec!["ajar", "beli", "buku", "buku"]);
}

#[test]
fn output_is_index_aligned_in_parallel() {
    let reviews: Vec<String> = (0..500)
        .map(|i| match i % 3 {
            0 => format!("ulasan nomor {} bagus", i),
            1 => "kurir lambat".to_string(),
            _ => String::new(),
        })
        .collect();

    let seq = sequential().preprocess_reviews(&reviews).unwrap();
    let par = parallel().preprocess_reviews(&reviews).unwrap();
    assert_eq!(seq, par);
    for (record, review) in par.iter().zip(&reviews) {
        assert_eq!(&record.original, review);
    }
}

#[test]
fn negation_survives_when_negator_is_not_a_stopword() {
    // "kurang" is kept by the stopword filter and flips "bagus"
    let records = sequential().preprocess_reviews(&["Kualitas kurang bagus"]).unwrap();
    assert!(records[0].stemmed.contains(&"kurang".to_string()));
    assert_eq!(records[0].sentiment_label, SentimentLabel::Negative);
}
