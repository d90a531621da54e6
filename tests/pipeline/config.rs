//! `ulasan.toml` driving resource loading

use crate::common::*;
use ulasan::{Error, FailurePolicy, Pipeline, PipelineConfig, SentimentLabel};

fn pipeline_from(toml: &str) -> (TempFile, ulasan::Result<Pipeline>) {
    let file = TempFile::new("ulasan.toml", toml);
    let pipeline = PipelineConfig::from_file(&file.path).and_then(|c| Pipeline::from_config(&c));
    (file, pipeline)
}

#[test]
fn empty_config_matches_builtin_pipeline() {
    let (_file, pipeline) = pipeline_from("");
    let pipeline = pipeline.unwrap();
    assert_eq!(pipeline.policy(), FailurePolicy::Isolate);

    let from_config = pipeline.preprocess_reviews(&SCENARIO_REVIEWS).unwrap();
    let builtin = sequential().preprocess_reviews(&SCENARIO_REVIEWS).unwrap();
    assert_eq!(from_config, builtin);
}

#[test]
fn excluding_a_negator_from_stopwords_keeps_negation() {
    let (_file, pipeline) = pipeline_from("[stopwords]\nexclude = [\"tidak\"]\n");
    let records = pipeline.unwrap().preprocess_reviews(&["Tidak bagus"]).unwrap();
    assert_eq!(records[0].final_text, "tidak bagus");
    assert_eq!(records[0].sentiment_label, SentimentLabel::Negative);

    let default = sequential().preprocess_reviews(&["Tidak bagus"]).unwrap();
    assert_eq!(default[0].final_text, "bagus");
    assert_eq!(default[0].sentiment_label, SentimentLabel::Positive);
}

#[test]
fn extra_stopwords_are_removed() {
    let (_file, pipeline) = pipeline_from("[stopwords]\nextra = [\"gan\"]\n");
    let records = pipeline.unwrap().preprocess_reviews(&["mantap gan"]).unwrap();
    assert_eq!(records[0].filtered, vec!["mantap"]);
}

#[test]
fn dictionary_file_resolved_next_to_config() {
    let file = TempFile::new("ulasan.toml", "[stemmer]\ndictionary_path = \"akar.txt\"\n");
    std::fs::write(file.sibling("akar.txt"), "mabar\n").unwrap();

    let before = sequential().preprocess_reviews(&["dimabarkan"]).unwrap();
    assert_eq!(before[0].final_text, "dimabarkan");

    let config = PipelineConfig::from_file(&file.path).unwrap();
    let records = Pipeline::from_config(&config).unwrap().preprocess_reviews(&["dimabarkan"]).unwrap();
    assert_eq!(records[0].final_text, "mabar");
}

#[test]
fn lexicon_file_adds_polarity() {
    let file = TempFile::new("ulasan.toml", "[sentiment]\nlexicon_path = \"kamus.tsv\"\n");
    std::fs::write(file.sibling("kamus.tsv"), "# slang\ngercep\t0.8\n").unwrap();

    let config = PipelineConfig::from_file(&file.path).unwrap();
    let records = Pipeline::from_config(&config).unwrap().preprocess_reviews(&["penjual gercep"]).unwrap();
    assert_eq!(records[0].sentiment_label, SentimentLabel::Positive);
}

#[test]
fn malformed_lexicon_is_resource_error() {
    let file = TempFile::new("ulasan.toml", "[sentiment]\nlexicon_path = \"kamus.tsv\"\n");
    std::fs::write(file.sibling("kamus.tsv"), "gercep\tsangat\n").unwrap();

    let config = PipelineConfig::from_file(&file.path).unwrap();
    let err = Pipeline::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn missing_dictionary_is_resource_error() {
    let (_file, pipeline) = pipeline_from("[stemmer]\ndictionary_path = \"hilang.txt\"\n");
    assert!(matches!(pipeline.unwrap_err(), Error::Resource { .. }));
}

#[test]
fn invalid_policy_is_config_error() {
    let (_file, pipeline) = pipeline_from("failure_policy = \"retry\"\n");
    let err = pipeline.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("retry"));
}

#[test]
fn fail_fast_from_config() {
    let (_file, pipeline) = pipeline_from("failure_policy = \"fail_fast\"\nparallel = false\n");
    assert_eq!(pipeline.unwrap().policy(), FailurePolicy::FailFast);
}

#[test]
fn large_min_stem_length_disables_stemming() {
    let (_file, pipeline) = pipeline_from("[stemmer]\nmin_stem_length = 50\n");
    let records = pipeline.unwrap().preprocess_reviews(&["pengiriman mengecewakan"]).unwrap();
    assert_eq!(records[0].stemmed, records[0].filtered);
}

#[test]
fn init_writes_loadable_default() {
    let file = TempFile::new("placeholder", "");
    let path = file.sibling("ulasan.toml");

    assert!(PipelineConfig::write_default_if_missing(&path).unwrap());
    assert!(!PipelineConfig::write_default_if_missing(&path).unwrap());
    assert_eq!(PipelineConfig::from_file(&path).unwrap(), PipelineConfig::default());
}
