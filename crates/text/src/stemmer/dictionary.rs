//! Root word dictionary
//!
//! Stemming is dictionary-guided: a candidate only counts as a root when it
//! appears here. The built-in list holds general Indonesian roots; slang or
//! domain roots can be merged from a file.

use crate::wordlist::{parse_word_list, read_word_list};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::info;
use ulasan_core::Result;

/// Built-in root words
const BUILTIN_ROOTS: &str = include_str!("../../resources/kata_dasar.txt");

/// Set of known Indonesian root words
#[derive(Debug, Clone)]
pub struct RootDictionary {
    roots: FxHashSet<String>,
}

impl Default for RootDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RootDictionary {
    /// The built-in root list
    pub fn builtin() -> Self {
        Self {
            roots: parse_word_list(BUILTIN_ROOTS).collect(),
        }
    }

    /// A dictionary built from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            roots: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Merge roots from a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns a resource error if the file cannot be read.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        let words = read_word_list(path)?;
        let before = self.roots.len();
        self.roots.extend(words);
        let added = self.roots.len() - before;
        info!(target: "ulasan::stemmer", path = %path.display(), added, "Merged root dictionary");
        Ok(added)
    }

    /// Add roots
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roots
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Check if a word is a known root
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Number of roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
