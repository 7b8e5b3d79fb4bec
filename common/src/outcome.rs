//! # Probe Outcomes
//!
//! What a successful probe reports, and the collection a scan hands back.
//! Serialized field names (`ip`, `status`, `port`, `service`, `banner`,
//! `subdomain`, `ips`) are the ones report writers consume.

use std::cmp::Ordering;
use std::net::IpAddr;

use serde::Serialize;

/// A successful probe result. Each variant carries only its own data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status")]
pub enum ProbeOutcome {
    #[serde(rename = "alive")]
    Alive { ip: IpAddr },

    #[serde(rename = "open")]
    OpenPort { port: u16, service: String },

    #[serde(rename = "banner")]
    Banner {
        port: u16,
        service: String,
        #[serde(rename = "banner")]
        text: String,
    },

    #[serde(rename = "resolved")]
    ResolvedSubdomain {
        #[serde(rename = "subdomain")]
        fqdn: String,
        ips: Vec<IpAddr>,
    },
}

impl ProbeOutcome {
    fn rank(&self) -> u8 {
        match self {
            ProbeOutcome::Alive { .. } => 0,
            ProbeOutcome::OpenPort { .. } => 1,
            ProbeOutcome::Banner { .. } => 2,
            ProbeOutcome::ResolvedSubdomain { .. } => 3,
        }
    }

    /// Orders by the identifying field of the unit that produced the outcome:
    /// IP for liveness, port for port and banner probes, FQDN for subdomains.
    pub fn cmp_by_unit(&self, other: &Self) -> Ordering {
        use ProbeOutcome::*;
        match (self, other) {
            (Alive { ip: a }, Alive { ip: b }) => a.cmp(b),
            (OpenPort { port: a, .. }, OpenPort { port: b, .. }) => a.cmp(b),
            (Banner { port: a, .. }, Banner { port: b, .. }) => a.cmp(b),
            (ResolvedSubdomain { fqdn: a, .. }, ResolvedSubdomain { fqdn: b, .. }) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Successful outcomes of one scan, in completion order.
///
/// Built whole from a finished list of outcomes. There is no method that
/// appends or removes, so a set returned by a scan never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    outcomes: Vec<ProbeOutcome>,
}

impl ResultSet {
    /// Freezes a finished list of outcomes, normally the aggregator's.
    pub fn from_completed(outcomes: Vec<ProbeOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeOutcome> {
        self.outcomes.iter()
    }

    pub fn as_slice(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    /// A copy ordered by unit (IP, port or FQDN) for stable display.
    pub fn sorted(&self) -> Vec<ProbeOutcome> {
        let mut outcomes: Vec<ProbeOutcome> = self.outcomes.clone();
        outcomes.sort_by(ProbeOutcome::cmp_by_unit);
        outcomes
    }

    /// Ports of every `OpenPort` outcome, ascending.
    pub fn open_ports(&self) -> Vec<u16> {
        let mut ports: Vec<u16> = self
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ProbeOutcome::OpenPort { port, .. } => Some(*port),
                _ => None,
            })
            .collect();
        ports.sort_unstable();
        ports
    }

    pub fn into_vec(self) -> Vec<ProbeOutcome> {
        self.outcomes
    }
}

impl IntoIterator for ResultSet {
    type Item = ProbeOutcome;
    type IntoIter = std::vec::IntoIter<ProbeOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ProbeOutcome;
    type IntoIter = std::slice::Iter<'a, ProbeOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
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
