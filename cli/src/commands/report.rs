//! Shared result presentation: console tree, summary line and JSON export.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use sweepr_common::outcome::{ProbeOutcome, ResultSet};

use crate::commands::Config;
use crate::mprint;
use crate::terminal::{colors, format, print};

#[derive(Serialize)]
struct Report<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    target: &'a str,
    timestamp: DateTime<Utc>,
    results: &'a ResultSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    banners: Option<&'a ResultSet>,
}

/// One finished scan, ready to be shown.
pub struct ScanSummary<'a> {
    pub kind: &'a str,
    pub target: &'a str,
    pub results: &'a ResultSet,
    pub attempted: usize,
    pub elapsed: Duration,
}

pub fn present(summary: &ScanSummary, cfg: &Config) {
    if summary.results.is_empty() {
        print::header("nothing found", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_results();
        }
    } else if cfg.quiet < 2 {
        print::header(&format!("{} results", summary.kind), cfg.quiet);
        print_outcomes(&summary.results.sorted());
    }
    print_summary(summary, cfg);
}

fn print_outcomes(outcomes: &[ProbeOutcome]) {
    for (idx, outcome) in outcomes.iter().enumerate() {
        let (title, details) = format::outcome_to_tree(outcome);
        print::tree_head(idx, &title);
        print::as_tree_one_level(details);
        if idx + 1 != outcomes.len() {
            mprint!();
        }
    }
}

fn print_summary(summary: &ScanSummary, cfg: &Config) {
    let found: ColoredString = format!("{} results", summary.results.len()).bold().green();
    let attempted: ColoredString = summary.attempted.to_string().bold();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "{} complete: {found} from {attempted} probes in {total_time}",
        capitalize(summary.kind)
    )
    .color(colors::TEXT_DEFAULT)
    .to_string();

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&output);
    } else {
        print::print(&output);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes `{ "type", "target", "timestamp", "results", "banners"? }` as pretty JSON.
pub fn write_json(
    path: &Path,
    summary: &ScanSummary,
    banners: Option<&ResultSet>,
) -> anyhow::Result<()> {
    let report = Report {
        kind: summary.kind,
        target: summary.target,
        timestamp: Utc::now(),
        results: summary.results,
        banners,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json: String = serde_json::to_string_pretty(&report).context("serializing report")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Exports when `--output` was given and says where the file went.
pub fn export(summary: &ScanSummary, banners: Option<&ResultSet>, cfg: &Config) -> anyhow::Result<()> {
    let Some(path) = &cfg.output else {
        return Ok(());
    };
    write_json(path, summary, banners)?;
    tracing::info!("Results saved to {}", path.display());
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
