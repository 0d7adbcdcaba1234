//! `license-detectr` — classify license text fragments against a catalogue
//! of known license templates.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load threshold config ([`config::load_config`]).
//! 3. Load the license catalogue, falling back to the built-in table
//!    ([`catalogue::Catalogue`]).
//! 4. Either evaluate labeled samples (`--samples`, [`evaluate`]) or classify
//!    the input fragment(s) ([`detect::classifier`]).
//! 5. Render the requested report ([`report`]).

mod catalogue;
mod cli;
mod config;
mod detect;
mod evaluate;
mod models;
mod report;
mod spdx;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use catalogue::Catalogue;
use cli::{Cli, ReportFormat};
use config::load_config;
use detect::classifier::LicenseClassifier;
use evaluate::Evaluator;
use models::{ExportRecord, Fragment, LabeledSample};
use spdx::SpdxCatalog;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let catalogue = Catalogue::load_or_default(cli.catalogue.as_deref());
    if let Some(path) = &cli.catalogue {
        if !cli.quiet && !path.exists() {
            eprintln!(
                "  {} catalogue {} not found, using built-in templates",
                "→".cyan(),
                path.display()
            );
        }
    }

    let classifier = LicenseClassifier::new(catalogue, config.detection);

    // Evaluation mode: score the classifier against labeled samples.
    if let Some(samples_path) = &cli.samples {
        let samples = read_samples(samples_path)?;
        let metrics = Evaluator::new(&classifier).evaluate(&samples)?;

        match cli.report {
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
            _ => report::terminal::render_metrics(&metrics, cli.quiet)?,
        }
        return Ok(());
    }

    // Detection mode: classify one fragment or a batch.
    let fragments = collect_fragments(&cli)?;

    if !cli.quiet {
        eprintln!(
            "  {} classifying {} fragment(s) against {} catalogue entries",
            "→".cyan(),
            fragments.len(),
            classifier.catalogue().len()
        );
    }

    let records: Vec<ExportRecord> = fragments
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| {
            let result = classifier.detect(&fragment.text);
            let id = fragment.id.unwrap_or_else(|| index.to_string());
            ExportRecord::new(id, fragment.text, result)
        })
        .collect();

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&records, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        ReportFormat::Csv => {
            print!("{}", report::csv::render(&records));
        }
        ReportFormat::Spdx => {
            let spdx_catalog = SpdxCatalog::load_or_default(cli.spdx_db.as_deref());
            println!("{}", report::spdx::render(&records, &spdx_catalog));
        }
    }

    Ok(())
}

/// Gather the fragments to classify: a `--batch` JSON file, a named input
/// file, or stdin when the input is `-` or absent.
fn collect_fragments(cli: &Cli) -> Result<Vec<Fragment>> {
    if let Some(batch_path) = &cli.batch {
        let content = std::fs::read_to_string(batch_path)
            .with_context(|| format!("failed to read batch file {}", batch_path.display()))?;
        let fragments: Vec<Fragment> =
            serde_json::from_str(&content).context("batch file is not a JSON fragment array")?;
        return Ok(fragments);
    }

    let text = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read fragment from stdin")?;
            buf
        }
    };

    Ok(vec![Fragment { id: None, text }])
}

fn read_samples(path: &Path) -> Result<Vec<LabeledSample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read samples file {}", path.display()))?;
    serde_json::from_str(&content).context("samples file is not a JSON sample array")
}
