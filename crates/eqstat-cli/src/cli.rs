//! CLI argument definitions for the equipment dataset analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eqstat",
    version,
    about = "Equipment dataset analyzer - statistical reports over CSV process data",
    long_about = "Analyze industrial equipment CSV datasets.\n\n\
                  Computes per-row health scores, z-score outliers, pairwise\n\
                  correlations, linear trends, and per-category aggregates,\n\
                  with a narrative summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a CSV dataset and print the report.
    Analyze(AnalyzeArgs),

    /// List semantic roles and the column names they accept.
    Roles,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV dataset.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write the full report as JSON to this path.
    #[arg(long = "json-out", value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Number of raw rows included in the report sample.
    #[arg(long = "sample-rows", value_name = "N", default_value_t = 20)]
    pub sample_rows: usize,

    /// Maximum input file size in bytes (default: 10 MB).
    #[arg(long = "max-file-size", value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Accept input files without a .csv extension.
    #[arg(long = "no-extension-check")]
    pub no_extension_check: bool,
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
