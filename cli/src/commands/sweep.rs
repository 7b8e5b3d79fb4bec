use std::time::Instant;

use sweepr_common::config::ScanConfig;
use sweepr_common::network::target::TargetSpec;
use sweepr_core::probe::LivenessMethod;
use sweepr_core::recon::ReconService;
use tracing::Instrument;

use crate::commands::Config;
use crate::commands::report::{self, ScanSummary};
use crate::terminal::spinner;

pub async fn sweep(
    targets: &TargetSpec,
    handshake: Option<u16>,
    scan_cfg: ScanConfig,
    cfg: &Config,
) -> anyhow::Result<()> {
    let method: LivenessMethod = match handshake {
        Some(port) => LivenessMethod::Handshake { port },
        None => LivenessMethod::Icmp,
    };
    let attempted: usize = targets.hosts().len();
    let span = spinner::scan_span("Sweeping", attempted);
    let service = ReconService::new(scan_cfg).with_progress(spinner::progress_callback(span.clone()));

    let start_time: Instant = Instant::now();
    let results = service.ping_sweep(targets, method).instrument(span).await;

    let target: String = describe(targets);
    let summary = ScanSummary {
        kind: "ping sweep",
        target: &target,
        results: &results,
        attempted,
        elapsed: start_time.elapsed(),
    };
    report::present(&summary, cfg);
    report::export(&summary, None, cfg)
}

fn describe(targets: &TargetSpec) -> String {
    match targets {
        TargetSpec::Host { target_addr } => target_addr.to_string(),
        TargetSpec::Range { ipv4_range } => {
            format!("{}-{}", ipv4_range.start_addr, ipv4_range.end_addr)
        }
        TargetSpec::Multi { targets } => targets.iter().map(describe).collect::<Vec<_>>().join(","),
    }
}
