use sweepr_common::config::ProbeKind;
use sweepr_common::error::EnumerationError;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_core::recon::ReconService;

use crate::support::{LOCALHOST, accept_forever, closed_port, fast_config, open_port};

/// Two listening ports and one closed port: exactly the listeners are reported.
#[tokio::test]
async fn port_scan_reports_only_listening_ports() {
    let (first, first_port) = open_port().await;
    let (second, second_port) = open_port().await;
    accept_forever(first);
    accept_forever(second);
    let closed: u16 = closed_port().await;

    let spec = format!("{first_port},{second_port},{closed}");
    let service = ReconService::new(fast_config(ProbeKind::PortConnect));
    let results = service.port_scan(LOCALHOST, &spec).await.unwrap();

    let mut open: Vec<u16> = results.open_ports();
    open.sort_unstable();
    let mut expected = vec![first_port, second_port];
    expected.sort_unstable();

    assert_eq!(open, expected);
    assert!(!open.contains(&closed));
    assert!(
        results
            .iter()
            .all(|outcome| matches!(outcome, ProbeOutcome::OpenPort { .. }))
    );
}

#[tokio::test]
async fn port_scan_rejects_a_bad_spec_before_probing() {
    let service = ReconService::new(fast_config(ProbeKind::PortConnect));
    let err = service.port_scan(LOCALHOST, "80,http").await.unwrap_err();
    assert!(matches!(err, EnumerationError::InvalidPortSpec { .. }));
}

#[tokio::test]
async fn port_scan_of_closed_ports_is_empty() {
    let closed: u16 = closed_port().await;
    let service = ReconService::new(fast_config(ProbeKind::PortConnect));
    let results = service.port_scan(LOCALHOST, &closed.to_string()).await.unwrap();
    assert!(results.is_empty());
}
