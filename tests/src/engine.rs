use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::ScanConfig;
use sweepr_common::network::services::service_name;
use sweepr_common::network::target::enumerate_cidr;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_common::unit::host_ports;
use sweepr_core::scanner::ProgressCallback;
use sweepr_core::{Orchestrator, Probe, ScanProgress, ScanState};

use crate::support::LOCALHOST;

#[derive(Default)]
struct Stats {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

/// Pretends every even port is open, with uneven response times.
#[derive(Clone, Default)]
struct SlowPortProbe {
    stats: Arc<Stats>,
}

#[async_trait]
impl Probe for SlowPortProbe {
    type Unit = SocketAddr;

    async fn probe(&self, addr: SocketAddr) -> Option<ProbeOutcome> {
        let now = self.stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.peak.fetch_max(now, Ordering::SeqCst);

        let port = addr.port();
        tokio::time::sleep(Duration::from_millis(u64::from(port % 7) * 3)).await;

        self.stats.in_flight.fetch_sub(1, Ordering::SeqCst);
        (port % 2 == 0).then(|| ProbeOutcome::OpenPort {
            port,
            service: service_name(port).to_string(),
        })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_latency_scan_respects_limit_and_collects_everything() {
    let ports: Vec<u16> = (1000..1200).collect();
    let probe = SlowPortProbe::default();
    let config = ScanConfig::default()
        .with_max_concurrency(12)
        .with_stagger_delay(Duration::ZERO);

    let updates: Arc<Mutex<Vec<ScanProgress>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = updates.clone();
    let callback: ProgressCallback = Arc::new(move |progress| recorder.lock().unwrap().push(progress));

    let orchestrator = Orchestrator::new(config).with_progress(callback);
    assert_eq!(orchestrator.state(), ScanState::Idle);
    let results = orchestrator
        .run(host_ports(LOCALHOST, &ports), probe.clone())
        .await;

    assert!(probe.stats.peak.load(Ordering::SeqCst) <= 12);
    assert_eq!(results.len(), 100);

    let found: HashSet<u16> = results.open_ports().into_iter().collect();
    let expected: HashSet<u16> = ports.iter().copied().filter(|p| p % 2 == 0).collect();
    assert_eq!(found, expected);

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), ports.len());
    assert!(updates.iter().all(|p| p.total == ports.len()));
    assert_eq!(updates.iter().map(|p| p.attempted).max(), Some(ports.len()));
}

#[tokio::test]
async fn limit_of_one_serialises_probes() {
    let probe = SlowPortProbe::default();
    let config = ScanConfig::default()
        .with_max_concurrency(0)
        .with_stagger_delay(Duration::ZERO);
    assert_eq!(config.max_concurrency, 1);

    let results = sweepr_core::run(host_ports(LOCALHOST, &[2, 4, 5]), probe.clone(), &config).await;
    assert_eq!(probe.stats.peak.load(Ordering::SeqCst), 1);
    assert_eq!(results.len(), 2);
}

/// Answers only for one address, counting every call.
#[derive(Clone)]
struct SingleHostProbe {
    reachable: IpAddr,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Probe for SingleHostProbe {
    type Unit = IpAddr;

    async fn probe(&self, ip: IpAddr) -> Option<ProbeOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (ip == self.reachable).then_some(ProbeOutcome::Alive { ip })
    }
}

#[tokio::test]
async fn slash_30_with_one_reachable_host_yields_exactly_that_host() -> anyhow::Result<()> {
    let reachable = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
    let units: Vec<IpAddr> = enumerate_cidr("192.0.2.0/30")?
        .into_iter()
        .map(IpAddr::V4)
        .collect();

    let probe = SingleHostProbe {
        reachable,
        calls: Arc::new(AtomicUsize::new(0)),
    };
    let config = ScanConfig::default().with_stagger_delay(Duration::ZERO);
    let results = sweepr_core::run(units, probe.clone(), &config).await;

    assert_eq!(results.into_vec(), vec![ProbeOutcome::Alive { ip: reachable }]);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
    Ok(())
}
