//! Polarity lexicon
//!
//! Maps words to a polarity in [-1, 1]. The text format is one
//! `word<TAB>polarity` entry per line; blank lines and `#` comments are
//! ignored. Later entries override earlier ones, so a file merged over the
//! built-in lexicon can re-weight existing words.

use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::info;
use ulasan_core::{Error, Result};

/// Built-in lexicon (Indonesian roots and common English review words)
const BUILTIN_LEXICON: &str = include_str!("../resources/lexicon.tsv");

/// Word → polarity table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    polarity: FxHashMap<String, f64>,
}

impl Lexicon {
    /// The built-in lexicon
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();
        // The embedded resource is checked by the tests below
        for (word, polarity) in BUILTIN_LEXICON.lines().filter_map(|l| parse_line(l).ok().flatten()) {
            lexicon.polarity.insert(word, polarity);
        }
        lexicon
    }

    /// Build a lexicon from explicit entries
    pub fn from_entries<S: AsRef<str>>(entries: &[(S, f64)]) -> Self {
        Self {
            polarity: entries
                .iter()
                .map(|(w, p)| (w.as_ref().to_lowercase(), p.clamp(-1.0, 1.0)))
                .collect(),
        }
    }

    /// Parse lexicon text.
    ///
    /// # Errors
    ///
    /// Returns a resource error naming the first malformed line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lexicon = Self::default();
        lexicon.merge_str(content)?;
        Ok(lexicon)
    }

    /// Merge entries from text, overriding existing words
    pub fn merge_str(&mut self, content: &str) -> Result<usize> {
        self.merge_lines(content).map_err(Error::resource)
    }

    /// Merge entries from a file.
    ///
    /// # Errors
    ///
    /// Returns a resource error if the file cannot be read or is malformed.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::resource(format!("Failed to read lexicon '{}': {}", path.display(), e))
        })?;
        let merged = self
            .merge_lines(&content)
            .map_err(|reason| Error::resource(format!("{}: {}", path.display(), reason)))?;
        info!(target: "ulasan::sentiment", path = %path.display(), merged, "Merged lexicon");
        Ok(merged)
    }

    fn merge_lines(&mut self, content: &str) -> std::result::Result<usize, String> {
        let mut merged = 0;
        for (lineno, line) in content.lines().enumerate() {
            let entry = parse_line(line).map_err(|reason| format!("line {}: {}", lineno + 1, reason))?;
            if let Some((word, polarity)) = entry {
                self.polarity.insert(word, polarity);
                merged += 1;
            }
        }
        Ok(merged)
    }

    /// Polarity of a word, if known
    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    /// Check if the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

/// `Ok(None)` for blank and comment lines
fn parse_line(line: &str) -> std::result::Result<Option<(String, f64)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, value) = line
        .split_once('\t')
        .ok_or_else(|| format!("expected word<TAB>polarity, got '{}'", line))?;
    let word = word.trim();
    if word.is_empty() {
        return Err("empty word".to_string());
    }

    let polarity: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid polarity '{}' for '{}'", value.trim(), word))?;
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(format!("polarity {} for '{}' outside [-1, 1]", polarity, word));
    }

    Ok(Some((word.to_lowercase(), polarity)))
}
