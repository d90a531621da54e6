//! Ulasan CLI: batch preprocessing and sentiment labeling for reviews.
//!
//! Subcommands:
//! - **process**: `ulasan process --input reviews.csv [--export out.csv]`
//! - **text**: `ulasan text "Barang bagus" "Kurir lambat"`
//! - **init-config**: `ulasan init-config [PATH]`

mod commands;
mod format;

use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;
use tracing::{info, Level};
use ulasan_core::{Error, Result};
use ulasan_pipeline::table::write_csv_path;
use ulasan_pipeline::{export_rows, Pipeline, PipelineConfig, ReviewTable, CONFIG_FILE_NAME};

use commands::build_cli;
use format::{format_error, format_report, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let result = match matches.subcommand() {
        Some(("init-config", sub)) => run_init_config(sub),
        Some(("process", sub)) => load_pipeline(&matches).and_then(|p| run_process(&p, sub, mode)),
        Some(("text", sub)) => load_pipeline(&matches).and_then(|p| run_text(&p, sub, mode)),
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("{}", format_error(&e, mode));
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// `--config` if given, else `./ulasan.toml` if present, else defaults
fn load_config(matches: &ArgMatches) -> Result<PipelineConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => PipelineConfig::from_file(Path::new(path)),
        None => {
            let local = Path::new(CONFIG_FILE_NAME);
            if local.exists() {
                PipelineConfig::from_file(local)
            } else {
                Ok(PipelineConfig::default())
            }
        }
    }
}

fn load_pipeline(matches: &ArgMatches) -> Result<Pipeline> {
    let config = load_config(matches)?;
    Pipeline::from_config(&config)
}

fn run_init_config(sub: &ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if PipelineConfig::write_default_if_missing(&path)? {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists, left unchanged", path.display());
    }
    Ok(())
}

fn run_process(pipeline: &Pipeline, sub: &ArgMatches, mode: OutputMode) -> Result<()> {
    let input = sub
        .get_one::<String>("input")
        .ok_or_else(|| Error::input_format("--input is required"))?;
    let column = sub.get_one::<String>("column").map(String::as_str);

    let table = ReviewTable::from_path(Path::new(input), column)?;
    info!(
        target: "ulasan::cli",
        input = %input,
        rows = table.len(),
        column = %table.review_column().name,
        "Loaded reviews"
    );

    let report = pipeline.report(&table.reviews())?;

    if let Some(export) = sub.get_one::<String>("export") {
        let rows = export_rows(&report.records, Some(&table));
        write_csv_path(Path::new(export), &rows)?;
        info!(target: "ulasan::cli", path = %export, rows = rows.len(), "Exported results");
    }

    println!("{}", format_report(&report, mode));
    Ok(())
}

fn run_text(pipeline: &Pipeline, sub: &ArgMatches, mode: OutputMode) -> Result<()> {
    let reviews: Vec<&str> = sub
        .get_many::<String>("reviews")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    let report = pipeline.report(&reviews)?;
    println!("{}", format_report(&report, mode));
    Ok(())
}
