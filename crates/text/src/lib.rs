//! Text processing stages for Indonesian reviews
//!
//! Each stage is a pure function (or an immutable, shareable resource):
//!
//! - [`normalizer`]: case folding, URL/symbol/digit removal
//! - [`tokenizer`]: whitespace tokenization
//! - [`stopwords`]: stopword filtering
//! - [`stemmer`]: dictionary-guided root extraction
//!
//! Resources ([`StopwordSet`], [`RootDictionary`]) are built once and can be
//! shared across threads without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod wordlist;

pub use normalizer::clean_text;
pub use stemmer::{IdentityStemmer, IndonesianStemmer, RootDictionary, WordStemmer};
pub use stopwords::StopwordSet;
pub use tokenizer::tokenize;
pub use wordlist::{parse_word_list, read_word_list};
