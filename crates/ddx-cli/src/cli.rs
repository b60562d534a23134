//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ddx_model::{LabFinding, Symptom};

#[derive(Parser)]
#[command(
    name = "ddx",
    version,
    about = "Infectious-disease differential questionnaire",
    long_about = "Score a patient's symptoms against five infectious-disease profiles,\n\
                  print a ranked differential diagnosis and the matching clinical\n\
                  guideline recommendations.\n\n\
                  Guidelines: IDSA, NICE, WHO. Intended for teaching differential\n\
                  diagnosis; not a substitute for clinical judgement."
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

    /// Allow selected symptoms and vitals to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Path to a TOML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a case and print the differential diagnosis.
    Diagnose(DiagnoseArgs),

    /// List the accepted symptom and lab finding labels.
    Vocabulary,

    /// List the clinical guideline knowledge base.
    Guidelines,
}

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Selected symptom, by key or label (repeatable).
    #[arg(short = 's', long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<Symptom>,

    /// Selected lab finding, by key or label (repeatable).
    #[arg(short = 'l', long = "lab", value_name = "FINDING")]
    pub lab_findings: Vec<LabFinding>,

    /// Body temperature in °C [default: 37.0].
    #[arg(long = "temperature", value_name = "CELSIUS")]
    pub temperature: Option<f64>,

    /// White blood cell count, ×10⁹/л [default: 6.0].
    #[arg(long = "wbc", value_name = "COUNT")]
    pub wbc: Option<f64>,

    /// C-reactive protein, мг/л [default: 2.0].
    #[arg(long = "crp", value_name = "MG_PER_L")]
    pub crp: Option<f64>,

    /// Load the case from a JSON file; other flags add to or override it.
    #[arg(long = "case", value_name = "FILE")]
    pub case_file: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Run the experimental classifier advisory (needs [advisory] config).
    #[arg(long = "advisory")]
    pub advisory: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Text,
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
