//! Whitespace tokenizer
//!
//! Operates on normalized text, so splitting on whitespace is enough:
//! symbols and digits are already gone.

/// Split text into whitespace-delimited tokens.
///
/// # Example
///
/// ```
/// use ulasan_text::tokenizer::tokenize;
///
/// let tokens = tokenize("barang bagus sekali");
/// assert_eq!(tokens, vec!["barang", "bagus", "sekali"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}
