//! Pipeline Test Suite
//!
//! End-to-end behavior of the batch pipeline through the public facade.
//!
//! - **scenarios**: documented input → record examples
//! - **failures**: isolate-and-continue vs fail-fast
//! - **statistics**: corpus and sentiment aggregates over real batches
//! - **table_io**: CSV ingestion, column resolution, export
//! - **config**: `ulasan.toml` driving resource loading
//!
//! ```bash
//! cargo test --test pipeline
//! ```

#[path = "../common/mod.rs"]
mod common;

mod config;
mod failures;
mod scenarios;
mod statistics;
mod table_io;
