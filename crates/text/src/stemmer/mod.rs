//! Indonesian stemming
//!
//! [`IndonesianStemmer`] reduces inflected and derived words to their root
//! using Enhanced Confix Stripping: suffixes and prefixes are removed in a
//! fixed order, prefix shapes are disambiguated by rule, and every candidate
//! is checked against a [`RootDictionary`]. A word that never reaches a root
//! is returned unchanged.
//!
//! Reduplicated words (`buku-buku`, `meniru-nirukan`) are stemmed per half
//! and collapse to the shared root when both halves agree.

mod context;
mod dictionary;
mod rules;

pub use dictionary::RootDictionary;

use context::StemContext;

/// Default minimum length (in chars) a token needs before stemming applies
pub const DEFAULT_MIN_STEM_LENGTH: usize = 3;

/// Suffixes that may trail a reduplicated word (`barang-barangnya`)
const REDUPLICATION_SUFFIXES: &[&str] = &["ku", "mu", "nya", "lah", "kah", "tah", "pun"];

/// Maps a token to its root form
///
/// Implementations must be total: every token yields some string, falling
/// back to the token itself.
pub trait WordStemmer: Send + Sync {
    /// Stem a single token
    fn stem(&self, token: &str) -> String;

    /// Stemmer name (for logging)
    fn name(&self) -> &str;

    /// Stem each token independently, preserving order and count
    fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t)).collect()
    }
}

/// Dictionary-guided Indonesian stemmer
#[derive(Debug, Clone)]
pub struct IndonesianStemmer {
    dictionary: RootDictionary,
    min_length: usize,
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IndonesianStemmer {
    /// Stemmer over the built-in root dictionary
    pub fn builtin() -> Self {
        Self::new(RootDictionary::builtin())
    }

    /// Stemmer over a custom dictionary
    pub fn new(dictionary: RootDictionary) -> Self {
        Self {
            dictionary,
            min_length: DEFAULT_MIN_STEM_LENGTH,
        }
    }

    /// Builder: tokens with at most this many chars are returned unchanged
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The root dictionary in use
    pub fn dictionary(&self) -> &RootDictionary {
        &self.dictionary
    }

    fn stem_word(&self, word: &str) -> String {
        if word.chars().count() <= self.min_length {
            return word.to_string();
        }
        StemContext::new(word, &self.dictionary).stem()
    }

    fn stem_reduplicated(&self, token: &str) -> Option<String> {
        let (mut first, second) = token.rsplit_once('-')?;
        let mut second = second.to_string();

        // "buku-buku-nya": the trailing suffix belongs to the second half
        if REDUPLICATION_SUFFIXES.contains(&second.as_str()) {
            if let Some((head, tail)) = first.rsplit_once('-') {
                second = format!("{}-{}", tail, second);
                first = head;
            }
        }

        if first.is_empty() || second.is_empty() || second.starts_with('-') {
            return None;
        }

        let first_root = self.stem_word(first);
        let mut second_root = self.stem_word(&second);

        // "nirukan" in meniru-nirukan only resolves with the prefix restored
        if !self.dictionary.contains(&second) && second_root == second {
            second_root = self.stem_word(&format!("me{}", second));
        }

        Some(if first_root == second_root {
            first_root
        } else {
            token.to_string()
        })
    }
}

impl WordStemmer for IndonesianStemmer {
    fn stem(&self, token: &str) -> String {
        if token.contains('-') {
            return self
                .stem_reduplicated(token)
                .unwrap_or_else(|| token.to_string());
        }
        self.stem_word(token)
    }

    fn name(&self) -> &str {
        "indonesian_ecs"
    }
}

/// Stemmer that returns every token unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl WordStemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &str {
        "identity"
    }
}
