//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any suite's
//! main.rs.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use ulasan::{Pipeline, ResultRecord, SentimentLabel};

/// The three-review batch used throughout the docs
pub const SCENARIO_REVIEWS: [&str; 3] = [
    "Barang bagus sekali, pengiriman cepat!",
    "",
    "Produk rusak dan mengecewakan",
];

/// Default pipeline, sequential so failures reproduce deterministically
pub fn sequential() -> Pipeline {
    Pipeline::default().with_parallel(false)
}

/// Default pipeline on the rayon pool
pub fn parallel() -> Pipeline {
    Pipeline::default().with_parallel(true)
}

/// Record with the given token counts and label; contents are placeholders
pub fn record_with_counts(tokens: usize, stemmed: usize, label: SentimentLabel) -> ResultRecord {
    let stems: Vec<String> = (0..stemmed).map(|i| format!("w{}", i)).collect();
    ResultRecord {
        original: String::new(),
        cleaned: String::new(),
        tokens: vec!["t".to_string(); tokens],
        filtered: stems.clone(),
        final_text: stems.join(" "),
        stemmed: stems,
        sentiment_score: 0.0,
        sentiment_label: label,
        failure: None,
    }
}

/// A temp dir holding one file with the given contents
pub struct TempFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write temp file");
        TempFile { dir, path }
    }

    /// Sibling path in the same temp dir
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
