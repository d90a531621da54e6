//! Stopword filtering
//!
//! The built-in list is the common Indonesian function-word set. Membership
//! is an exact, case-sensitive match: tokens reaching the filter are already
//! lowercase.

use crate::wordlist::parse_word_list;
use rustc_hash::FxHashSet;

/// Built-in Indonesian stopword list
const INDONESIAN_STOPWORDS: &str = include_str!("../resources/stopwords_id.txt");

/// Immutable set of stopwords
///
/// Built once at startup and shared read-only by every review in a batch.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::indonesian()
    }
}

impl StopwordSet {
    /// The built-in Indonesian stopword set
    pub fn indonesian() -> Self {
        Self {
            words: parse_word_list(INDONESIAN_STOPWORDS).collect(),
        }
    }

    /// An empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// A set built from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Builder: add words to the set
    pub fn with_extra<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
        self
    }

    /// Builder: remove words from the set
    pub fn without<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
        self
    }

    /// Check if a token is a stopword
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Remove stopwords, preserving the relative order of the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use ulasan_text::stopwords::StopwordSet;
    ///
    /// let set = StopwordSet::indonesian();
    /// let tokens = vec!["produk".to_string(), "yang".to_string(), "bagus".to_string()];
    /// assert_eq!(set.filter(&tokens), vec!["produk", "bagus"]);
    /// ```
    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.contains(token))
            .cloned()
            .collect()
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
