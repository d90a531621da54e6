//! Pipeline configuration via `ulasan.toml`
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard Indonesian pipeline. `ulasan init-config` writes the commented
//! default file; edit it and rerun.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ulasan_core::{Error, Result};
use ulasan_text::stemmer::DEFAULT_MIN_STEM_LENGTH;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "ulasan.toml";

/// Default size of the word-frequency table.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// What happens when a single review fails mid-pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record a degraded result for the review and keep going
    #[default]
    Isolate,
    /// Abort the batch with the first failure
    FailFast,
}

/// Stopword list adjustments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StopwordConfig {
    /// Words added to the built-in set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
    /// Words removed from the built-in set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// Stemmer resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StemmerConfig {
    /// Root word list merged with the built-in dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,
    /// Tokens with at most this many characters are not stemmed
    #[serde(default = "default_min_stem_length")]
    pub min_stem_length: usize,
}

fn default_min_stem_length() -> usize {
    DEFAULT_MIN_STEM_LENGTH
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            min_stem_length: default_min_stem_length(),
        }
    }
}

/// Sentiment resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentConfig {
    /// `word<TAB>polarity` file merged over the built-in lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_path: Option<PathBuf>,
}

/// Pipeline configuration loaded from `ulasan.toml`.
///
/// # Example
///
/// ```toml
/// failure_policy = "isolate"
/// parallel = true
/// top_words = 20
///
/// [stopwords]
/// extra = ["gan", "sis"]
///
/// [stemmer]
/// dictionary_path = "kata-dasar.txt"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Failure policy: `"isolate"` or `"fail_fast"`.
    #[serde(default = "default_failure_policy_str")]
    pub failure_policy: String,
    /// Process reviews on the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Number of entries in the word-frequency table.
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    /// Stopword adjustments.
    #[serde(default)]
    pub stopwords: StopwordConfig,
    /// Stemmer resources.
    #[serde(default)]
    pub stemmer: StemmerConfig,
    /// Sentiment resources.
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

fn default_failure_policy_str() -> String {
    "isolate".to_string()
}

fn default_parallel() -> bool {
    true
}

fn default_top_words() -> usize {
    DEFAULT_TOP_WORDS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            failure_policy: default_failure_policy_str(),
            parallel: default_parallel(),
            top_words: default_top_words(),
            stopwords: StopwordConfig::default(),
            stemmer: StemmerConfig::default(),
            sentiment: SentimentConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse the failure policy string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"isolate"` or `"fail_fast"`.
    pub fn failure_policy(&self) -> Result<FailurePolicy> {
        match self.failure_policy.as_str() {
            "isolate" => Ok(FailurePolicy::Isolate),
            "fail_fast" => Ok(FailurePolicy::FailFast),
            other => Err(Error::config(format!(
                "Invalid failure_policy '{}' in ulasan.toml. Expected \"isolate\" or \"fail_fast\".",
                other
            ))),
        }
    }

    /// Check every value, not just the ones that parse.
    pub fn validate(&self) -> Result<()> {
        self.failure_policy()?;
        if self.top_words == 0 {
            return Err(Error::config("top_words must be at least 1"));
        }
        Ok(())
    }

    /// Resolve relative resource paths against the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut Option<PathBuf>| {
            if let Some(path) = p {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        };
        resolve(&mut self.stemmer.dictionary_path);
        resolve(&mut self.sentiment.lexicon_path);
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Ulasan review pipeline configuration
#
# What to do when one review fails mid-pipeline: "isolate" (default) or "fail_fast"
#   "isolate"   = emit a degraded record (empty text, score 0.0, Netral) and continue
#   "fail_fast" = abort the whole batch with an error
failure_policy = "isolate"

# Process reviews in parallel (default: true). Output order always matches input order.
parallel = true

# Number of entries in the most-frequent-words table (default: 20)
top_words = 20

[stopwords]
# Words added to / removed from the built-in Indonesian stopword list
# extra = ["gan", "sis", "kak"]
# exclude = ["tidak"]

[stemmer]
# Newline-delimited root word list merged with the built-in dictionary.
# Relative paths are resolved against this file's directory.
# dictionary_path = "kata-dasar.txt"

# Tokens with at most this many characters are left unstemmed (default: 3)
min_stem_length = 3

[sentiment]
# word<TAB>polarity file merged over the built-in lexicon
# lexicon_path = "lexicon.tsv"
"#
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: PipelineConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::config(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
