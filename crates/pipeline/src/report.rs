//! Batch report: records plus every derived statistic

use crate::stats::{get_sentiment_statistics, get_statistics, word_frequencies};
use serde::{Deserialize, Serialize};
use ulasan_core::{CorpusStats, Error, Result, ResultRecord, SentimentStats, WordCount};

/// Everything computed for one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One record per input review, in input order
    pub records: Vec<ResultRecord>,
    /// Token reduction metrics
    pub corpus: CorpusStats,
    /// Label distribution
    pub sentiment: SentimentStats,
    /// Most frequent stemmed words
    pub top_words: Vec<WordCount>,
}

impl BatchReport {
    /// Compute statistics over `records`
    pub fn from_records(records: Vec<ResultRecord>, top_n: usize) -> Self {
        let corpus = get_statistics(&records);
        let sentiment = get_sentiment_statistics(&records);
        let top_words = word_frequencies(&records, top_n);
        Self {
            records,
            corpus,
            sentiment,
            top_words,
        }
    }

    /// Number of degraded records
    pub fn degraded(&self) -> usize {
        self.records.iter().filter(|r| r.is_degraded()).count()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
