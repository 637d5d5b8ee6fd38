//! CLI argument definitions for the table cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bps",
    version,
    about = "Clean and profile statistical agency tables",
    long_about = "Reconstruct flat tables from agency-style spreadsheet exports.\n\n\
                  Detects where the data body starts, merges stacked header rows\n\
                  into one header per column and profiles each column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow header and cell values to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect the data start, merge header rows and print the flat table.
    Clean(CleanArgs),

    /// Profile the columns of one or more sheets.
    Profile(ProfileArgs),

    /// Print the default heuristic settings as JSON.
    Defaults,
}

#[derive(Args)]
pub struct CleanArgs {
    /// CSV export of a single sheet.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the cleaned table as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Number of data rows shown in the preview table.
    #[arg(long = "preview", value_name = "N", default_value_t = 10)]
    pub preview: usize,

    #[command(flatten)]
    pub heuristics: HeuristicArgs,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// CSV exports; each file is profiled as one sheet named by its stem.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Print the sheet profiles as a JSON array.
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub heuristics: HeuristicArgs,
}

/// Options shared by commands that read tables.
#[derive(Args)]
pub struct HeuristicArgs {
    /// JSON file with heuristic settings; missing fields keep their defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefix for generated column names (e.g. "Kolom").
    #[arg(long = "placeholder-prefix", value_name = "TEXT")]
    pub placeholder_prefix: Option<String>,

    /// Number of data rows sampled per column when profiling.
    #[arg(long = "sample-rows", value_name = "N")]
    pub sample_rows: Option<usize>,

    /// Field delimiter of the CSV input.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
