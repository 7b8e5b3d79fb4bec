use std::net::{IpAddr, Ipv4Addr};

use sweepr_common::config::ProbeKind;
use sweepr_common::network::target::TargetSpec;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_core::probe::LivenessMethod;
use sweepr_core::recon::ReconService;

use crate::support::{LOCALHOST, accept_forever, closed_port, fast_config, open_port};

#[tokio::test]
async fn handshake_sweep_finds_localhost() {
    let (listener, port) = open_port().await;
    accept_forever(listener);

    let targets: TargetSpec = "127.0.0.1-3".parse().unwrap();
    let service = ReconService::new(fast_config(ProbeKind::Liveness));
    let results = service
        .ping_sweep(&targets, LivenessMethod::Handshake { port })
        .await;

    assert!(results.len() <= 3);
    assert!(results.iter().any(|outcome| *outcome == ProbeOutcome::Alive { ip: LOCALHOST }));
}

/// A refused connection still proves the host is up.
#[tokio::test]
async fn refused_handshake_counts_as_alive() {
    let port: u16 = closed_port().await;
    let targets = TargetSpec::Host {
        target_addr: LOCALHOST,
    };
    let service = ReconService::new(fast_config(ProbeKind::Liveness));
    let results = service
        .ping_sweep(&targets, LivenessMethod::Handshake { port })
        .await;

    assert_eq!(results.into_vec(), vec![ProbeOutcome::Alive { ip: LOCALHOST }]);
}

#[tokio::test]
async fn cidr_sweep_rejects_malformed_blocks() {
    let service = ReconService::new(fast_config(ProbeKind::Liveness));
    for bad in ["10.0.0.0/33", "10.0.0/24", "nonsense"] {
        let result = service
            .ping_sweep_cidr(bad, LivenessMethod::Handshake { port: 1 })
            .await;
        assert!(result.is_err(), "{bad} was accepted");
    }
}

#[tokio::test]
async fn cidr_sweep_over_loopback_slash_30() {
    let (listener, port) = open_port().await;
    accept_forever(listener);

    let service = ReconService::new(fast_config(ProbeKind::Liveness));
    let results = service
        .ping_sweep_cidr("127.0.0.0/30", LivenessMethod::Handshake { port })
        .await
        .unwrap();

    let alive: Vec<IpAddr> = results
        .iter()
        .filter_map(|outcome| match outcome {
            ProbeOutcome::Alive { ip } => Some(*ip),
            _ => None,
        })
        .collect();
    assert!(alive.contains(&LOCALHOST));
    assert!(!alive.contains(&IpAddr::V4(Ipv4Addr::new(127, 0, 0, 0))));
    assert!(!alive.contains(&IpAddr::V4(Ipv4Addr::new(127, 0, 0, 3))));
}
