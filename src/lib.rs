//! Ulasan - preprocessing and sentiment labeling for Indonesian product reviews
//!
//! Turns a batch of raw review texts into structured records: cleaned text,
//! tokens, stopword-filtered tokens, stemmed roots, and a polarity score with
//! a three-way label. Corpus statistics (token reduction, sentiment
//! distribution, word frequency) are computed from the records on demand.
//!
//! # Quick Start
//!
//! ```
//! use ulasan::{get_sentiment_statistics, Pipeline, SentimentLabel};
//!
//! let pipeline = Pipeline::default();
//! let records = pipeline
//!     .preprocess_reviews(&["Barang bagus sekali, pengiriman cepat!", "Produk rusak dan mengecewakan"])
//!     .unwrap();
//!
//! assert_eq!(records[0].sentiment_label, SentimentLabel::Positive);
//! assert_eq!(records[1].final_text, "produk rusak kecewa");
//! assert_eq!(get_sentiment_statistics(&records).negative, 1);
//! ```
//!
//! # Architecture
//!
//! - `ulasan-core`: record, statistics and error types
//! - `ulasan-text`: normalizer, tokenizer, stopwords, Indonesian stemmer
//! - `ulasan-sentiment`: lexicon scorer and label thresholds
//! - `ulasan-pipeline`: orchestration, configuration, statistics, CSV I/O

pub use ulasan_core::{
    round2, CorpusStats, Error, Result, ResultRecord, SentimentLabel, SentimentStats, Stage,
    StageCounts, WordCount,
};
pub use ulasan_pipeline::{
    export_rows, find_column, get_sentiment_statistics, get_statistics, table, word_frequencies,
    write_csv, BatchReport, ColumnMatch, ExportRow, FailurePolicy, Pipeline, PipelineConfig,
    Resources, ReviewTable,
};
pub use ulasan_sentiment::{label_for, Lexicon, LexiconScorer, SentimentScorer};
pub use ulasan_text::{
    clean_text, tokenize, IdentityStemmer, IndonesianStemmer, RootDictionary, StopwordSet,
    WordStemmer,
};
