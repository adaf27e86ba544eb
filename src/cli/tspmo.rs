// ABOUTME: CLI tspmo command - spin up every active recipe
//
// Reads the active list from twin.toml and opens each recipe whose session is
// not running yet. Per-recipe failures are reported and never abort the run.

use anyhow::Result;

use super::OutputFormat;
use crate::config::TwinConfig;
use crate::session::{reconcile_active, ReconcileReport};
use crate::tmux::Tmux;

/// Execute the tspmo command
pub fn execute(format: OutputFormat) -> Result<()> {
    let config = TwinConfig::load()?;
    Tmux::check_installed()?;

    let report = reconcile_active(&config.active, &config.recipes(), &Tmux::new());

    match format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Text => output_text(&report, config.active.is_empty()),
    }

    Ok(())
}

/// Output the report as JSON
fn output_json(report: &ReconcileReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

/// Output the report as text, failures on stderr
fn output_text(report: &ReconcileReport, nothing_configured: bool) {
    for failed in &report.failed {
        eprintln!("skipping {}: {}", failed.name, failed.reason);
    }

    if let Some(line) = summary_line("created", &report.created) {
        println!("{line}");
    }
    if let Some(line) = summary_line("skipped (already exists)", &report.skipped) {
        println!("{line}");
    }
    if nothing_configured {
        println!("no active recipes configured");
    }
}

fn summary_line(label: &str, names: &[String]) -> Option<String> {
    (!names.is_empty()).then(|| format!("{label}: {}", names.join(", ")))
}
