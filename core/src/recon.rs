//! # Reconnaissance Use Cases
//!
//! Each operation turns user input into target units, picks the matching
//! probe and hands both to a fresh [`Orchestrator`]. Input problems are
//! reported before anything is sent on the wire.

use std::net::IpAddr;
use std::path::Path;

use sweepr_common::config::ScanConfig;
use sweepr_common::error::EnumerationError;
use sweepr_common::network::ports::parse_port_spec;
use sweepr_common::network::target::{TargetSpec, enumerate_cidr};
use sweepr_common::outcome::ResultSet;
use sweepr_common::unit::{self, SubdomainCandidate};
use sweepr_common::wordlist::{load_wordlist, validate_domain};
use tracing::info;

use crate::probe::{
    BannerProbe, LivenessMethod, LivenessProbe, PortProbe, Probe, Resolver, SubdomainProbe,
    SystemResolver,
};
use crate::scanner::{Orchestrator, ProgressCallback};

/// Application service for the four scan types.
///
/// Holds the tunables and an optional progress observer; every call runs an
/// independent scan.
#[derive(Clone)]
pub struct ReconService {
    config: ScanConfig,
    on_progress: Option<ProgressCallback>,
}

impl ReconService {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Liveness check of every host in `targets`.
    pub async fn ping_sweep(&self, targets: &TargetSpec, method: LivenessMethod) -> ResultSet {
        let hosts: Vec<IpAddr> = targets.hosts();
        info!("Ping sweep over {} hosts", hosts.len());
        let probe = LivenessProbe::new(method, self.config.per_probe_timeout);
        self.scan(hosts, probe).await
    }

    /// Liveness check of the usable hosts of a CIDR block.
    pub async fn ping_sweep_cidr(
        &self,
        cidr: &str,
        method: LivenessMethod,
    ) -> Result<ResultSet, EnumerationError> {
        let hosts: Vec<IpAddr> = enumerate_cidr(cidr)?.into_iter().map(IpAddr::V4).collect();
        info!("Ping sweep over {cidr} ({} hosts)", hosts.len());
        let probe = LivenessProbe::new(method, self.config.per_probe_timeout);
        Ok(self.scan(hosts, probe).await)
    }

    /// TCP connect scan of `ip` over the ports in `port_spec`.
    pub async fn port_scan(&self, ip: IpAddr, port_spec: &str) -> Result<ResultSet, EnumerationError> {
        let ports: Vec<u16> = parse_port_spec(port_spec)?;
        info!("Scanning {} ports on {ip}", ports.len());
        let probe = PortProbe::new(self.config.per_probe_timeout);
        Ok(self.scan(unit::host_ports(ip, &ports), probe).await)
    }

    /// Banner grab on each of `ports`, typically the open ports of a port scan.
    pub async fn banner_grab(&self, ip: IpAddr, ports: &[u16]) -> ResultSet {
        info!("Grabbing banners from {} ports on {ip}", ports.len());
        let probe = BannerProbe::new(self.config.per_probe_timeout);
        self.scan(unit::host_ports(ip, ports), probe).await
    }

    /// Resolves every wordlist label under `domain` with the system resolver.
    pub async fn brute_force_subdomains(
        &self,
        domain: &str,
        wordlist: &Path,
    ) -> Result<ResultSet, EnumerationError> {
        validate_domain(domain)?;
        let labels: Vec<String> = load_wordlist(wordlist)?;
        self.brute_force_with(domain, labels, SystemResolver).await
    }

    /// Like [`Self::brute_force_subdomains`] with caller-supplied labels and resolver.
    pub async fn brute_force_with<R: Resolver>(
        &self,
        domain: &str,
        labels: Vec<String>,
        resolver: R,
    ) -> Result<ResultSet, EnumerationError> {
        validate_domain(domain)?;
        let candidates: Vec<SubdomainCandidate> = unit::subdomain_candidates(labels, domain);
        info!("Trying {} subdomains of {domain}", candidates.len());
        let probe = SubdomainProbe::with_resolver(resolver, self.config.per_probe_timeout);
        Ok(self.scan(candidates, probe).await)
    }

    async fn scan<P: Probe>(&self, units: Vec<P::Unit>, probe: P) -> ResultSet {
        let mut orchestrator = Orchestrator::new(self.config);
        if let Some(callback) = &self.on_progress {
            orchestrator = orchestrator.with_progress(callback.clone());
        }
        orchestrator.run(units, probe).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
