use std::net::IpAddr;
use std::time::Instant;

use sweepr_common::config::ScanConfig;
use sweepr_common::outcome::ResultSet;
use sweepr_core::recon::ReconService;
use tracing::{Instrument, info};

use crate::commands::Config;
use crate::commands::report::{self, ScanSummary};
use crate::terminal::{print, spinner};

pub async fn ports(
    target: IpAddr,
    port_spec: &str,
    scan_cfg: ScanConfig,
    banner_cfg: Option<ScanConfig>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let ports: Vec<u16> = sweepr_common::network::ports::parse_port_spec(port_spec)?;
    let span = spinner::scan_span("Scanning ports", ports.len());
    let service = ReconService::new(scan_cfg).with_progress(spinner::progress_callback(span.clone()));

    let start_time: Instant = Instant::now();
    let results: ResultSet = service.port_scan(target, port_spec).instrument(span).await?;
    let elapsed = start_time.elapsed();

    let target_str: String = target.to_string();
    let summary = ScanSummary {
        kind: "port scan",
        target: &target_str,
        results: &results,
        attempted: ports.len(),
        elapsed,
    };
    report::present(&summary, cfg);

    let banners: Option<ResultSet> = match banner_cfg {
        Some(banner_cfg) => grab_banners(target, &results, banner_cfg, cfg).await,
        None => None,
    };

    report::export(&summary, banners.as_ref(), cfg)
}

async fn grab_banners(
    target: IpAddr,
    scan: &ResultSet,
    banner_cfg: ScanConfig,
    cfg: &Config,
) -> Option<ResultSet> {
    let open_ports: Vec<u16> = scan.open_ports();
    if open_ports.is_empty() {
        info!("No open ports, skipping banner grab");
        return None;
    }

    print::header("banner grab", cfg.quiet);
    let span = spinner::scan_span("Grabbing banners", open_ports.len());
    let service = ReconService::new(banner_cfg).with_progress(spinner::progress_callback(span.clone()));

    let start_time: Instant = Instant::now();
    let banners: ResultSet = service.banner_grab(target, &open_ports).instrument(span).await;

    let target_str: String = target.to_string();
    report::present(
        &ScanSummary {
            kind: "banner grab",
            target: &target_str,
            results: &banners,
            attempted: open_ports.len(),
            elapsed: start_time.elapsed(),
        },
        cfg,
    );
    Some(banners)
}
