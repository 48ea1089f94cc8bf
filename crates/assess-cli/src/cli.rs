//! CLI argument definitions for the assessment analyzer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "assessment-analyzer",
    version,
    about = "Assessment Analyzer - Learning target mastery from quiz exports",
    long_about = "Analyze exported assessment responses.\n\n\
                  Finds question score columns, rejects exports whose columns look like\n\
                  personal data, and reports how many students fall inside each\n\
                  learning target's range of correct answers."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the score questions of an export with their correct rates.
    Questions(UploadArgs),

    /// Screen an export's column names for personal data.
    CheckPii(UploadArgs),

    /// Report learning target mastery for an export.
    Analyze(AnalyzeArgs),
}

/// Arguments shared by every command that reads an export.
#[derive(Args)]
pub struct UploadArgs {
    /// Path to the exported responses (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter of the export.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// JSON file with analysis options (score_suffix, correct_prefix, ...).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suffix marking score columns [default: " [Score]"].
    #[arg(long = "score-suffix", value_name = "SUFFIX")]
    pub score_suffix: Option<String>,

    /// Text a score cell starts with when the answer is correct [default: "1.00"].
    #[arg(long = "correct-prefix", value_name = "PREFIX")]
    pub correct_prefix: Option<String>,

    /// Correct ratio (0-1) at or below which a configuration warning is shown.
    #[arg(long = "warn-threshold", value_name = "RATIO")]
    pub warn_threshold: Option<f64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub upload: UploadArgs,

    /// JSON file with an array of learning targets
    /// ({"name", "questions", "min_correct", "max_correct"}).
    #[arg(long = "groups", value_name = "PATH")]
    pub groups: Option<PathBuf>,

    /// Inline learning target as NAME:Q1,Q2,...:MIN:MAX (repeatable).
    #[arg(long = "group", value_name = "SPEC")]
    pub group: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
