use std::net::IpAddr;

use colored::*;
use sweepr_common::outcome::ProbeOutcome;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

const BANNER_PREVIEW_WIDTH: usize = 48;

/// Splits an outcome into a tree title and its detail lines.
pub fn outcome_to_tree(outcome: &ProbeOutcome) -> (String, Vec<Detail>) {
    match outcome {
        ProbeOutcome::Alive { ip } => (ip.to_string(), vec![ip_to_detail(ip), state_detail("up")]),
        ProbeOutcome::OpenPort { port, service } => (
            port_title(*port),
            vec![service_detail(service), state_detail("open")],
        ),
        ProbeOutcome::Banner {
            port,
            service,
            text,
        } => (
            port_title(*port),
            vec![
                service_detail(service),
                ("Banner".to_string(), banner_preview(text).color(colors::BANNER)),
            ],
        ),
        ProbeOutcome::ResolvedSubdomain { fqdn, ips } => {
            (fqdn.clone(), ips.iter().map(ip_to_detail).collect())
        }
    }
}

pub fn ip_to_detail(ip: &IpAddr) -> Detail {
    match ip {
        IpAddr::V4(v4) => ("IPv4".to_string(), v4.to_string().color(colors::IPV4_ADDR)),
        IpAddr::V6(v6) => ("IPv6".to_string(), v6.to_string().color(colors::IPV6_ADDR)),
    }
}

fn port_title(port: u16) -> String {
    format!("{}/tcp", port.to_string().color(colors::PORT))
}

fn service_detail(service: &str) -> Detail {
    ("Service".to_string(), service.color(colors::SERVICE))
}

fn state_detail(state: &str) -> Detail {
    ("State".to_string(), state.green().bold())
}

/// First line of a banner, cut to fit the tree.
pub fn banner_preview(text: &str) -> String {
    let first_line: &str = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if first_line.chars().count() <= BANNER_PREVIEW_WIDTH {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(BANNER_PREVIEW_WIDTH - 3).collect();
    format!("{cut}...")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
