//! CLI argument definitions for the neuronorm tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "neuronorm",
    version,
    about = "Normative score standardization for neuropsychological tests",
    long_about = "Standardize a raw neuropsychological test score against\n\
                  age-appropriate normative tables, producing z-score, t-score\n\
                  and percentile rank.\n\n\
                  Norms are bundled per test (adult research bands plus a\n\
                  child-age regression with empirical anchor overrides)."
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
    /// Standardize one raw score for one subject.
    Score(ScoreArgs),

    /// List the bundled test definitions.
    Tests,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Test identifier (see `neuronorm tests`).
    #[arg(long = "test", value_name = "ID")]
    pub test: String,

    /// Subject age in years; fractional ages are accepted.
    #[arg(long = "age", value_name = "YEARS")]
    pub age: f64,

    /// Raw test score in the test's unit.
    #[arg(long = "raw", value_name = "SCORE")]
    pub raw: f64,

    /// Print the result as JSON instead of the text report.
    #[arg(long = "json")]
    pub json: bool,
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
