use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-detectr",
    about = "Classify license text fragments against a catalogue of known licenses",
    version
)]
pub struct Cli {
    /// File containing one license text fragment ("-" for stdin)
    #[arg(value_name = "FILE", conflicts_with_all = ["batch", "samples"])]
    pub input: Option<PathBuf>,

    /// JSON file with a batch of fragments: [{"id": "...", "text": "..."}]
    #[arg(long, value_name = "FILE", conflicts_with = "samples")]
    pub batch: Option<PathBuf>,

    /// Evaluate against labeled samples: [{"text": "...", "expected_license": "..."}]
    #[arg(long, value_name = "FILE")]
    pub samples: Option<PathBuf>,

    /// License catalogue JSON [default: built-in six-license table]
    #[arg(long, value_name = "FILE")]
    pub catalogue: Option<PathBuf>,

    /// SPDX license info JSON [default: built-in table]
    #[arg(long = "spdx-db", value_name = "FILE")]
    pub spdx_db: Option<PathBuf>,

    /// Threshold config file [default: ./.license-detectr/config.toml, fallback ~/.config/license-detectr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show per-fragment candidate tables
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Csv,
    Spdx,
}
