use std::sync::Arc;

use colored::*;
use indicatif::ProgressStyle;
use sweepr_core::ScanProgress;
use sweepr_core::scanner::ProgressCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

const TEMPLATE: &str = "{spinner:.blue} {msg} {wide_bar:.green/bright_black} {pos}/{len}";

fn style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

/// A span that renders as a progress bar while a scan runs inside it.
pub fn scan_span(action: &str, total: usize) -> Span {
    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&style());
    span.pb_set_length(total as u64);
    span.pb_set_message(&action.color(colors::TEXT_DEFAULT).to_string());
    span
}

/// Feeds orchestrator progress into the bar owned by `span`.
pub fn progress_callback(span: Span) -> ProgressCallback {
    Arc::new(move |progress: ScanProgress| {
        span.pb_set_position(progress.attempted as u64);
        span.pb_set_message(&format!(
            "Found {} so far...",
            progress.found.to_string().green().bold()
        ));
    })
}
