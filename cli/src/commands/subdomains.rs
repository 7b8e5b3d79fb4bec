use std::path::Path;
use std::time::Instant;

use sweepr_common::config::ScanConfig;
use sweepr_common::outcome::ResultSet;
use sweepr_common::wordlist;
use sweepr_core::recon::ReconService;
use tracing::Instrument;

use crate::commands::Config;
use crate::commands::report::{self, ScanSummary};
use crate::terminal::spinner;

pub async fn subdomains(
    domain: &str,
    wordlist_path: &Path,
    scan_cfg: ScanConfig,
    cfg: &Config,
) -> anyhow::Result<()> {
    wordlist::validate_domain(domain)?;
    let labels: Vec<String> = wordlist::load_wordlist(wordlist_path)?;
    let attempted: usize = labels.len();

    let span = spinner::scan_span("Resolving", attempted);
    let service = ReconService::new(scan_cfg).with_progress(spinner::progress_callback(span.clone()));

    let start_time: Instant = Instant::now();
    let results: ResultSet = service
        .brute_force_with(domain, labels, sweepr_core::probe::SystemResolver)
        .instrument(span)
        .await?;

    let summary = ScanSummary {
        kind: "subdomain brute force",
        target: domain,
        results: &results,
        attempted,
        elapsed: start_time.elapsed(),
    };
    report::present(&summary, cfg);
    report::export(&summary, None, cfg)
}
