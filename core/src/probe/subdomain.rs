//! Subdomain resolution.
//!
//! Each candidate is resolved for A records through a [`Resolver`]. The
//! default [`SystemResolver`] goes through the operating system's resolver,
//! so `/etc/hosts` and search settings apply just like for any other program.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_common::unit::SubdomainCandidate;
use tokio::time::timeout;
use tracing::debug;

use super::Probe;

/// Name lookup seam between the probe and the resolver it talks to.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// IPv4 addresses for `fqdn`. An empty list or an `Err` both mean the
    /// name did not resolve.
    async fn lookup_ipv4(&self, fqdn: &str) -> io::Result<Vec<Ipv4Addr>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup_ipv4(&self, fqdn: &str) -> io::Result<Vec<Ipv4Addr>> {
        let addrs = tokio::net::lookup_host((fqdn, 0u16)).await?;
        Ok(addrs
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
            .collect())
    }
}

pub struct SubdomainProbe<R = SystemResolver> {
    resolver: R,
    timeout: Duration,
}

impl SubdomainProbe<SystemResolver> {
    pub fn new(timeout: Duration) -> Self {
        Self::with_resolver(SystemResolver, timeout)
    }
}

impl<R: Resolver> SubdomainProbe<R> {
    pub fn with_resolver(resolver: R, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }
}

#[async_trait]
impl<R: Resolver> Probe for SubdomainProbe<R> {
    type Unit = SubdomainCandidate;

    async fn probe(&self, candidate: SubdomainCandidate) -> Option<ProbeOutcome> {
        let fqdn: String = candidate.fqdn();
        if fqdn.parse::<IpAddr>().is_ok() {
            debug!("{fqdn} is an address literal, not a name");
            return None;
        }

        let addrs: Vec<Ipv4Addr> = match timeout(self.timeout, self.resolver.lookup_ipv4(&fqdn)).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => {
                debug!("{fqdn} did not resolve: {e}");
                return None;
            }
            Err(_elapsed) => {
                debug!("Lookup for {fqdn} timed out");
                return None;
            }
        };

        let ips: Vec<IpAddr> = dedup_in_order(addrs);
        if ips.is_empty() {
            debug!("{fqdn} has no A records");
            return None;
        }
        Some(ProbeOutcome::ResolvedSubdomain { fqdn, ips })
    }
}

fn dedup_in_order(addrs: Vec<Ipv4Addr>) -> Vec<IpAddr> {
    let mut ips: Vec<IpAddr> = Vec::with_capacity(addrs.len());
    for addr in addrs {
        let ip = IpAddr::V4(addr);
        if !ips.contains(&ip) {
            ips.push(ip);
        }
    }
    ips
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
