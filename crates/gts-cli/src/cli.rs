//! CLI argument definitions for the growth time series toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gts_model::Transformation;

#[derive(Parser)]
#[command(
    name = "gts",
    version,
    about = "Growth time series toolkit - extract, transform, and export country series",
    long_about = "Extract country-level growth-accounting time series from a CSV dataset,\n\
                  apply a value transformation (raw, log, or annual growth rate), and\n\
                  export the result as CSV and Stata .dta tables."
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
    /// Run the pipeline and write wide CSV/Stata exports.
    Export(ExportArgs),

    /// Print summary statistics without writing exports.
    Stats(StatsArgs),

    /// List the countries present in a dataset.
    Countries(DatasetArgs),

    /// List the variables available for one country.
    Variables(VariablesArgs),
}

/// Selection flags shared by `export` and `stats`.
#[derive(Args)]
pub struct SelectionArgs {
    /// Path to the growth-accounting CSV dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Country to extract (must match the Country column exactly).
    #[arg(long, value_name = "NAME")]
    pub country: String,

    /// Variable to include; repeatable. All of the country's variables when omitted.
    #[arg(long = "variable", value_name = "NAME")]
    pub variables: Vec<String>,

    /// First year of the range (default: earliest year column).
    #[arg(long, value_name = "YEAR")]
    pub start: Option<i32>,

    /// Last year of the range (default: latest year column).
    #[arg(long, value_name = "YEAR")]
    pub end: Option<i32>,

    /// Value transformation to apply.
    #[arg(long, value_enum, default_value = "raw")]
    pub transform: TransformArg,

    /// Trailing moving-average window applied after the transformation.
    #[arg(long, value_name = "N")]
    pub smooth: Option<usize>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// JSON file with the canonical variable ordering (an array of names).
    #[arg(long = "order-file", value_name = "PATH")]
    pub order_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Path to the growth-accounting CSV dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

#[derive(Args)]
pub struct VariablesArgs {
    /// Path to the growth-accounting CSV dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Country whose variables to list.
    #[arg(long, value_name = "NAME")]
    pub country: String,
}

/// CLI transformation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TransformArg {
    Raw,
    Log,
    Growth,
}

impl From<TransformArg> for Transformation {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::Raw => Transformation::Raw,
            TransformArg::Log => Transformation::Log,
            TransformArg::Growth => Transformation::GrowthRate,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Dta,
    Both,
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
