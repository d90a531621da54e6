//! Review preprocessing pipeline
//!
//! Wires the text stages and the sentiment scorer into a batch pipeline:
//!
//! - [`Pipeline`]: per-review orchestration with failure isolation and
//!   optional rayon fan-out
//! - [`stats`]: corpus statistics, sentiment distribution, word frequency
//! - [`PipelineConfig`]: `ulasan.toml` configuration
//! - [`Resources`]: the immutable stopword set, stemmer and scorer
//! - [`table`]: CSV ingestion with column resolution, and CSV export
//!
//! # Example
//!
//! ```
//! use ulasan_pipeline::{get_statistics, Pipeline};
//!
//! let pipeline = Pipeline::default();
//! let records = pipeline
//!     .preprocess_reviews(&["Barang bagus sekali, pengiriman cepat!", ""])
//!     .unwrap();
//!
//! assert_eq!(records[0].final_text, "barang bagus sekali kirim cepat");
//! assert_eq!(get_statistics(&records).total_reviews, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod pipeline;
pub mod report;
pub mod resources;
pub mod stats;
pub mod table;

pub use config::{FailurePolicy, PipelineConfig, CONFIG_FILE_NAME, DEFAULT_TOP_WORDS};
pub use pipeline::Pipeline;
pub use report::BatchReport;
pub use resources::Resources;
pub use stats::{get_sentiment_statistics, get_statistics, word_frequencies};
pub use table::{export_rows, find_column, write_csv, ColumnMatch, ExportRow, ReviewTable};
