//! Case folding and cleaning
//!
//! Pipeline, strictly in order:
//! 1. Lowercase
//! 2. Drop URLs (`http…` / `www…` up to the next whitespace)
//! 3. Replace every non-word, non-space character with a space
//! 4. Drop digit runs
//! 5. Collapse whitespace and trim
//!
//! Steps 2-4 repeat while step 4 has glued a new URL together
//! (`ht1tpabc` → `httpabc`), so the output is always a fixed point.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").expect("valid URL pattern"));
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid symbol pattern"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid space pattern"));

/// Normalize raw review text.
///
/// Never fails; any string is valid input and the output may be empty.
///
/// # Example
///
/// ```
/// use ulasan_text::normalizer::clean_text;
///
/// let cleaned = clean_text("Barang BAGUS!! cek www.toko.id 100%");
/// assert_eq!(cleaned, "barang bagus cek");
/// ```
pub fn clean_text(text: &str) -> String {
    let mut current = text.to_lowercase();

    loop {
        let without_urls = URL.replace_all(&current, "");
        let without_symbols = NON_WORD.replace_all(&without_urls, " ");
        let without_digits = DIGITS.replace_all(&without_symbols, "").into_owned();

        let rejoined_url = URL.is_match(&without_digits);
        current = without_digits;
        if !rejoined_url {
            break;
        }
    }

    WHITESPACE.replace_all(&current, " ").trim().to_string()
}
