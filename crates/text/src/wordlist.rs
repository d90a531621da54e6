//! Newline-delimited word list resources
//!
//! Used for the stopword list and the stemmer's root dictionary. Blank lines
//! and lines starting with `#` are ignored; entries are trimmed and
//! lowercased.

use std::path::Path;
use ulasan_core::{Error, Result};

/// Parse a word list from text.
pub fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

/// Read and parse a word list from a file.
///
/// # Errors
///
/// Returns [`Error::Resource`] if the file cannot be read.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::resource(format!(
            "Failed to read word list '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_word_list(&content).collect())
}
