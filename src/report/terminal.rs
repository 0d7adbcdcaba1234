use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{EvaluationMetrics, ExportRecord};

/// Render a colored terminal report for a batch of detection results.
pub fn render(records: &[ExportRecord], verbose: bool, quiet: bool) -> Result<()> {
    let total = records.len();
    let unknown_count = records
        .iter()
        .filter(|r| r.detected_license == "Unknown")
        .count();
    let ambiguous_count = records
        .iter()
        .filter(|r| r.is_ambiguous && r.detected_license != "Unknown")
        .count();
    let confident_count = total - unknown_count - ambiguous_count;

    if quiet {
        println!(
            "Total: {}  Confident: {}  Ambiguous: {}  Unknown: {}",
            total,
            confident_count.to_string().green(),
            ambiguous_count.to_string().yellow(),
            unknown_count.to_string().red(),
        );
        return Ok(());
    }

    println!("\n {} v{}", "license-detectr".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Fragments analyzed: {}\n", total);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("{}  Confident       : {:>4}", "✓".green(), confident_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Ambiguous       : {:>4}", "⚠".yellow(), ambiguous_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Unknown         : {:>4}", "✗".red(), unknown_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Detected License").add_attribute(Attribute::Bold),
            Cell::new("SPDX ID").add_attribute(Attribute::Bold),
            Cell::new("Confidence").add_attribute(Attribute::Bold),
            Cell::new("Ambiguous").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        let license_color = if record.detected_license == "Unknown" {
            Color::DarkGrey
        } else if record.is_ambiguous {
            Color::Yellow
        } else {
            Color::Green
        };

        table.add_row(vec![
            Cell::new(&record.id),
            Cell::new(&record.detected_license).fg(license_color),
            Cell::new(record.spdx_id.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.3}", record.confidence))
                .set_alignment(CellAlignment::Right),
            Cell::new(if record.is_ambiguous { "⚠ yes" } else { "no" })
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{table}");

    if verbose {
        for record in records {
            if record.matches.is_empty() {
                continue;
            }
            println!("\n {} {}", "Candidates for".bold(), record.id);
            let mut detail = Table::new();
            detail
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("License").add_attribute(Attribute::Bold),
                    Cell::new("Similarity").add_attribute(Attribute::Bold),
                    Cell::new("Keywords").add_attribute(Attribute::Bold),
                    Cell::new("Combined").add_attribute(Attribute::Bold),
                ]);
            for m in &record.matches {
                detail.add_row(vec![
                    Cell::new(&m.license_name),
                    Cell::new(format!("{:.3}", m.similarity)).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:.3}", m.keyword_score))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:.3}", m.combined_score))
                        .set_alignment(CellAlignment::Right),
                ]);
            }
            println!("{detail}");
        }
    }

    Ok(())
}

/// Render evaluation metrics as a terminal table.
pub fn render_metrics(metrics: &EvaluationMetrics, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "Accuracy: {}  Precision: {}  Recall: {}  F1: {}",
            metrics.accuracy, metrics.precision, metrics.recall, metrics.f1_score
        );
        return Ok(());
    }

    println!("\n {} v{}", "license-detectr".bold(), env!("CARGO_PKG_VERSION"));
    println!(
        " Evaluated {} labeled samples ({} correct)\n",
        metrics.total_samples, metrics.correct
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    let rows = [
        ("Accuracy", metrics.accuracy),
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1 score", metrics.f1_score),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{value:.3}")).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("True positives"),
        Cell::new(metrics.true_positives.to_string()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("False positives"),
        Cell::new(metrics.false_positives.to_string()).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("False negatives"),
        Cell::new(metrics.false_negatives.to_string()).set_alignment(CellAlignment::Right),
    ]);

    println!("{table}");
    Ok(())
}
