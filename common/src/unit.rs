//! Target units: the one thing a single probe looks at.
//!
//! Units are created by the enumerators, never mutated, and moved into the
//! worker that probes them.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Marker for values a probe can be pointed at.
pub trait TargetUnit: fmt::Display + Send + Sync + 'static {}

impl TargetUnit for IpAddr {}

impl TargetUnit for SocketAddr {}

impl TargetUnit for SubdomainCandidate {}

/// A label to try under a base domain, e.g. `www` under `example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubdomainCandidate {
    label: String,
    base_domain: Arc<str>,
}

impl SubdomainCandidate {
    pub fn new(label: impl Into<String>, base_domain: Arc<str>) -> Self {
        Self {
            label: label.into(),
            base_domain,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.label, self.base_domain)
    }
}

impl fmt::Display for SubdomainCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.base_domain)
    }
}

/// Pairs every label with `base_domain`, keeping label order and duplicates.
pub fn subdomain_candidates<I, S>(labels: I, base_domain: &str) -> Vec<SubdomainCandidate>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let base: Arc<str> = Arc::from(base_domain.trim_end_matches('.'));
    labels
        .into_iter()
        .map(|label| SubdomainCandidate::new(label, base.clone()))
        .collect()
}

/// One socket per port on a single host, in port order.
pub fn host_ports(ip: IpAddr, ports: &[u16]) -> Vec<SocketAddr> {
    ports.iter().map(|&port| SocketAddr::new(ip, port)).collect()
}
