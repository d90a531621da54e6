//! Report → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): statistics, sentiment distribution, top words and
//!   one line per review
//! - **JSON** (`--json`): the whole `BatchReport`, pretty-printed

use ulasan_core::{Error, ResultRecord, SentimentLabel};
use ulasan_pipeline::BatchReport;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a batch report.
pub fn format_report(report: &BatchReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => format_human(report),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_human(report: &BatchReport) -> String {
    let mut out = String::new();
    let corpus = &report.corpus;

    out.push_str("Statistics\n");
    out.push_str(&format!("  reviews             {}\n", corpus.total_reviews));
    out.push_str(&format!("  avg tokens (orig)   {:.2}\n", corpus.avg_tokens_original));
    out.push_str(&format!("  avg tokens (final)  {:.2}\n", corpus.avg_tokens_final));
    out.push_str(&format!("  reduction rate      {:.2}%\n", corpus.reduction_rate));

    let degraded = report.degraded();
    if degraded > 0 {
        out.push_str(&format!("  failed              {}\n", degraded));
    }

    out.push_str("\nSentiment\n");
    for label in SentimentLabel::ALL {
        out.push_str(&format!(
            "  {:<8} {:>5}  ({:.2}%)\n",
            label.as_str(),
            report.sentiment.count(label),
            report.sentiment.percentage(label)
        ));
    }

    if !report.top_words.is_empty() {
        out.push_str("\nTop words\n");
        let width = report.top_words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
        for (i, wc) in report.top_words.iter().enumerate() {
            out.push_str(&format!("  {:>2}. {:<width$}  {}\n", i + 1, wc.word, wc.count, width = width));
        }
    }

    if !report.records.is_empty() {
        out.push_str("\nReviews\n");
        for (i, record) in report.records.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i + 1, format_record_line(record)));
        }
    }

    // drop the final newline; println! adds one
    out.pop();
    out
}

fn format_record_line(record: &ResultRecord) -> String {
    if let Some(reason) = &record.failure {
        return format!("(failed) {}", reason);
    }
    let counts = record.stage_counts();
    let text = if record.final_text.is_empty() {
        "(empty)"
    } else {
        record.final_text.as_str()
    };
    format!(
        "{:<7} {:>6.3}  {}→{}→{}  {}",
        record.sentiment_label.as_str(),
        record.sentiment_score,
        counts.original,
        counts.filtered,
        counts.stemmed,
        text
    )
}
