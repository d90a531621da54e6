//! Tabular ingestion and export
//!
//! Reviews usually arrive as a CSV export from a store scraper, with the
//! review text under one of several customary column names. Column
//! resolution is an explicit first-match over an alias list: the order of
//! the aliases decides, not the order of the headers.
//!
//! Exports join each [`ResultRecord`] with the row it came from by index.

use serde::Serialize;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use ulasan_core::{Error, Result, ResultRecord, SentimentLabel};

/// Accepted names for the review text column, in priority order
pub const REVIEW_COLUMNS: &[&str] = &[
    "review",
    "reviewContent",
    "content",
    "comment",
    "ulasan",
    "text",
    "review_text",
];

/// Accepted names for the reviewer column, in priority order
pub const USERNAME_COLUMNS: &[&str] = &["userName", "username", "author", "user"];

/// Accepted names for the rating column, in priority order
pub const SCORE_COLUMNS: &[&str] = &["score", "rating", "stars"];

/// Placeholder for missing cells and metadata
pub const MISSING: &str = "-";

/// A resolved column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    /// Position in the header row
    pub index: usize,
    /// Header name as found
    pub name: String,
}

/// First alias (in alias order) that names a header exactly.
///
/// # Example
///
/// ```
/// use ulasan_pipeline::table::{find_column, REVIEW_COLUMNS};
///
/// let headers = ["userName", "content", "review"];
/// let found = find_column(&headers, REVIEW_COLUMNS).unwrap();
/// assert_eq!((found.index, found.name.as_str()), (2, "review"));
/// ```
pub fn find_column<S: AsRef<str>>(headers: &[S], aliases: &[&str]) -> Option<ColumnMatch> {
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .position(|h| h.as_ref() == *alias)
            .map(|index| ColumnMatch {
                index,
                name: alias.to_string(),
            })
    })
}

/// Decode UTF-8, silently dropping invalid byte sequences
fn decode_dropping_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to marks a verified prefix
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // truncated sequence at the end
                    None => return out,
                }
            }
        }
    }
}

fn csv_error(e: csv::Error) -> Error {
    Error::csv(e.to_string())
}

/// Rows of a review CSV with resolved columns
#[derive(Debug, Clone)]
pub struct ReviewTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    review: ColumnMatch,
    username: Option<ColumnMatch>,
    score: Option<ColumnMatch>,
}

impl ReviewTable {
    /// Read a headered CSV.
    ///
    /// Invalid UTF-8 bytes are dropped (`ba\xffgus` reads as `bagus`). Rows
    /// longer than the header (or otherwise unreadable) are skipped, and
    /// empty or missing cells become `-`.
    /// `review_column` overrides alias resolution for the review text.
    ///
    /// # Errors
    ///
    /// [`Error::InputFormat`] if no review column is found or the header row
    /// cannot be read.
    pub fn from_csv_reader<R: io::Read>(reader: R, review_column: Option<&str>) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .byte_headers()
            .map_err(|e| Error::input_format(format!("Unreadable CSV header: {}", e)))?
            .iter()
            .map(|h| decode_dropping_invalid(h).trim().to_string())
            .collect();

        let review = match review_column {
            Some(name) => find_column(&headers, &[name]).ok_or_else(|| {
                Error::input_format(format!("Column '{}' not found in CSV header", name))
            })?,
            None => find_column(&headers, REVIEW_COLUMNS).ok_or_else(|| {
                Error::input_format(format!(
                    "No review column found. Expected one of: {}",
                    REVIEW_COLUMNS.join(", ")
                ))
            })?,
        };
        let username = find_column(&headers, USERNAME_COLUMNS);
        let score = find_column(&headers, SCORE_COLUMNS);

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (line, result) in rdr.byte_records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(target: "ulasan::table", row = line + 1, error = %e, "Skipping unreadable row");
                    skipped += 1;
                    continue;
                }
            };
            if record.len() > headers.len() {
                warn!(
                    target: "ulasan::table",
                    row = line + 1,
                    fields = record.len(),
                    expected = headers.len(),
                    "Skipping row with too many fields"
                );
                skipped += 1;
                continue;
            }

            let mut row: Vec<String> = record
                .iter()
                .map(|cell| {
                    let cell = decode_dropping_invalid(cell);
                    if cell.trim().is_empty() {
                        MISSING.to_string()
                    } else {
                        cell
                    }
                })
                .collect();
            row.resize(headers.len(), MISSING.to_string());
            rows.push(row);
        }

        debug!(
            target: "ulasan::table",
            rows = rows.len(),
            skipped,
            review_column = %review.name,
            "Loaded review table"
        );

        Ok(Self {
            headers,
            rows,
            review,
            username,
            score,
        })
    }

    /// Read a CSV file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be opened, otherwise as
    /// [`ReviewTable::from_csv_reader`].
    pub fn from_path(path: &Path, review_column: Option<&str>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(io::BufReader::new(file), review_column)
    }

    /// Header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The resolved review column
    pub fn review_column(&self) -> &ColumnMatch {
        &self.review
    }

    /// The resolved username column, if any
    pub fn username_column(&self) -> Option<&ColumnMatch> {
        self.username.as_ref()
    }

    /// The resolved score column, if any
    pub fn score_column(&self) -> Option<&ColumnMatch> {
        self.score.as_ref()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column(&self, column: &ColumnMatch) -> Vec<&str> {
        self.rows.iter().map(|row| row[column.index].as_str()).collect()
    }

    /// Review texts, one per row
    pub fn reviews(&self) -> Vec<&str> {
        self.column(&self.review)
    }

    /// Usernames, one per row, if the column exists
    pub fn usernames(&self) -> Option<Vec<&str>> {
        self.username.as_ref().map(|c| self.column(c))
    }

    /// Scores, one per row, if the column exists
    pub fn scores(&self) -> Option<Vec<&str>> {
        self.score.as_ref().map(|c| self.column(c))
    }
}

/// One exported row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    /// Reviewer, or `-`
    #[serde(rename = "Username")]
    pub username: String,
    /// Rating as given, or `-`
    #[serde(rename = "Score")]
    pub score: String,
    /// Unmodified review
    #[serde(rename = "Review Original")]
    pub review_original: String,
    /// Preprocessed text
    #[serde(rename = "Final Text")]
    pub final_text: String,
    /// Polarity
    #[serde(rename = "Sentiment Score")]
    pub sentiment_score: f64,
    /// Label
    #[serde(rename = "Sentiment Label")]
    pub sentiment_label: SentimentLabel,
}

/// Join records with table metadata by index.
///
/// Without a table, or when the table is shorter than `records`, username
/// and score are `-`.
pub fn export_rows(records: &[ResultRecord], table: Option<&ReviewTable>) -> Vec<ExportRow> {
    let usernames = table.and_then(ReviewTable::usernames);
    let scores = table.and_then(ReviewTable::scores);
    let lookup = |column: &Option<Vec<&str>>, i: usize| {
        column
            .as_ref()
            .and_then(|values| values.get(i))
            .map_or_else(|| MISSING.to_string(), |v| v.to_string())
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| ExportRow {
            username: lookup(&usernames, i),
            score: lookup(&scores, i),
            review_original: record.original.clone(),
            final_text: record.final_text.clone(),
            sentiment_score: record.sentiment_score,
            sentiment_label: record.sentiment_label,
        })
        .collect()
}

/// Write export rows as CSV with a header row.
///
/// # Errors
///
/// [`Error::Csv`] if serialization or the underlying writer fails.
pub fn write_csv<W: io::Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record([
            "Username",
            "Score",
            "Review Original",
            "Final Text",
            "Sentiment Score",
            "Sentiment Label",
        ])
        .map_err(csv_error)?;
    }
    for row in rows {
        wtr.serialize(row).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write export rows to a file.
pub fn write_csv_path(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(io::BufWriter::new(file), rows)
}
