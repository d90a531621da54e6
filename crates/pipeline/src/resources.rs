//! Shared language resources
//!
//! Built once at startup from a [`PipelineConfig`] and then only read. Every
//! worker holds the same `Arc`s; nothing here is mutated after construction.

use crate::config::PipelineConfig;
use std::sync::Arc;
use tracing::info;
use ulasan_core::Result;
use ulasan_sentiment::{Lexicon, LexiconScorer, SentimentScorer};
use ulasan_text::{IndonesianStemmer, RootDictionary, StopwordSet, WordStemmer};

/// Immutable stopword set, stemmer and scorer
#[derive(Clone)]
pub struct Resources {
    /// Stopwords removed before stemming
    pub stopwords: Arc<StopwordSet>,
    /// Token → root
    pub stemmer: Arc<dyn WordStemmer>,
    /// Text → polarity
    pub scorer: Arc<dyn SentimentScorer>,
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("stopwords", &self.stopwords.len())
            .field("stemmer", &self.stemmer.name())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Resources {
    /// Built-in Indonesian resources
    pub fn builtin() -> Self {
        Self {
            stopwords: Arc::new(StopwordSet::indonesian()),
            stemmer: Arc::new(IndonesianStemmer::builtin()),
            scorer: Arc::new(LexiconScorer::builtin()),
        }
    }

    /// Build resources from configuration.
    ///
    /// # Errors
    ///
    /// Returns a resource error if a configured dictionary or lexicon file
    /// cannot be loaded.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let stopwords = StopwordSet::indonesian()
            .with_extra(&config.stopwords.extra)
            .without(&config.stopwords.exclude);

        let mut dictionary = RootDictionary::builtin();
        if let Some(path) = &config.stemmer.dictionary_path {
            dictionary.merge_file(path)?;
        }
        let stemmer = IndonesianStemmer::new(dictionary).with_min_length(config.stemmer.min_stem_length);

        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &config.sentiment.lexicon_path {
            lexicon.merge_file(path)?;
        }

        info!(
            target: "ulasan::resources",
            stopwords = stopwords.len(),
            roots = stemmer.dictionary().len(),
            lexicon = lexicon.len(),
            "Loaded language resources"
        );

        Ok(Self {
            stopwords: Arc::new(stopwords),
            stemmer: Arc::new(stemmer),
            scorer: Arc::new(LexiconScorer::new(lexicon)),
        })
    }

    /// Builder: replace the stemmer
    pub fn with_stemmer(mut self, stemmer: Arc<dyn WordStemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Builder: replace the scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: replace the stopword set
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }
}
