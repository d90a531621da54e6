//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ulasan")
        .about("Preprocessing and sentiment labeling for Indonesian product reviews")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./ulasan.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("More log output on stderr (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(build_process())
        .subcommand(build_text())
        .subcommand(build_init_config())
}

fn build_process() -> Command {
    Command::new("process")
        .about("Process reviews from a CSV file")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .required(true)
                .help("CSV file with a header row"),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .value_name("NAME")
                .help("Review column (default: first of review, reviewContent, content, comment, ulasan, text, review_text)"),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .short('o')
                .value_name("FILE")
                .help("Write the result table as CSV"),
        )
}

fn build_text() -> Command {
    Command::new("text")
        .about("Process reviews given as arguments")
        .arg(
            Arg::new("reviews")
                .required(true)
                .num_args(1..)
                .value_name("REVIEW")
                .help("One or more review texts"),
        )
}

fn build_init_config() -> Command {
    Command::new("init-config")
        .about("Write the default ulasan.toml")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .default_value("ulasan.toml")
                .help("Where to write the file (existing files are kept)"),
        )
}
