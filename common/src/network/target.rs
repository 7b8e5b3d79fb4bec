//! # Scan Target Model
//!
//! Turns user input into an ordered list of hosts. Accepted forms:
//! * A single IPv4 or IPv6 address.
//! * A CIDR block (e.g., `192.168.1.0/24`), host bits allowed.
//! * An IPv4 range (e.g., `192.168.1.1-100`, `10.0.0.1-10.0.1.20`).
//! * A comma-separated list mixing the above.

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::error::EnumerationError;
use crate::network::range::{self, Ipv4Range};

/// Parsed, not yet expanded, scan targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    Host { target_addr: IpAddr },
    Range { ipv4_range: Ipv4Range },
    Multi { targets: Vec<TargetSpec> },
}

impl FromStr for TargetSpec {
    type Err = EnumerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EnumerationError::range(s, "empty target"));
        }

        if s.contains(',') {
            return parse_commas(s);
        }

        if let Ok(target_addr) = s.parse::<IpAddr>() {
            return Ok(TargetSpec::Host { target_addr });
        }

        if let Some(target) = parse_cidr(s)? {
            return Ok(target);
        }

        if let Some(target) = parse_ip_range(s)? {
            return Ok(target);
        }

        Err(EnumerationError::range(s, "not an address, CIDR block or range"))
    }
}

impl TargetSpec {
    /// Expands into hosts in input order, ascending within each range.
    ///
    /// An address listed twice is kept at its first position only.
    pub fn hosts(&self) -> Vec<IpAddr> {
        let mut seen: HashSet<IpAddr> = HashSet::new();
        let mut hosts: Vec<IpAddr> = Vec::new();
        self.collect_into(&mut seen, &mut hosts);
        hosts
    }

    fn collect_into(&self, seen: &mut HashSet<IpAddr>, hosts: &mut Vec<IpAddr>) {
        match self {
            TargetSpec::Host { target_addr } => {
                if seen.insert(*target_addr) {
                    hosts.push(*target_addr);
                }
            }
            TargetSpec::Range { ipv4_range } => {
                for ip in ipv4_range.to_iter() {
                    if seen.insert(ip) {
                        hosts.push(ip);
                    }
                }
            }
            TargetSpec::Multi { targets } => {
                for target in targets {
                    target.collect_into(seen, hosts);
                }
            }
        }
    }
}

/// Usable hosts of a CIDR string, ascending, network and broadcast excluded.
///
/// A bare address is read as a `/32`.
pub fn enumerate_cidr(cidr: &str) -> Result<Vec<Ipv4Addr>, EnumerationError> {
    let cidr = cidr.trim();
    if let Ok(addr) = cidr.parse::<Ipv4Addr>() {
        return Ok(vec![addr]);
    }

    match parse_cidr(cidr)? {
        Some(TargetSpec::Range { ipv4_range }) => Ok(ipv4_range.iter().collect()),
        _ => Err(EnumerationError::range(cidr, "expected <address>/<prefix>")),
    }
}

fn parse_commas(s: &str) -> Result<TargetSpec, EnumerationError> {
    let targets = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(TargetSpec::from_str)
        .collect::<Result<Vec<TargetSpec>, _>>()?;

    if targets.is_empty() {
        return Err(EnumerationError::range(s, "no targets in list"));
    }
    Ok(TargetSpec::Multi { targets })
}

fn parse_cidr(s: &str) -> Result<Option<TargetSpec>, EnumerationError> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Ok(None);
    };

    let ip = ip_str
        .parse::<Ipv4Addr>()
        .map_err(|e| EnumerationError::range(s, format!("bad address '{ip_str}': {e}")))?;
    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|e| EnumerationError::range(s, format!("bad prefix '{prefix_str}': {e}")))?;

    let ipv4_range = range::cidr_hosts(ip, prefix)?;
    Ok(Some(TargetSpec::Range { ipv4_range }))
}

/// Parses "1.1.1.1-2.2.2.2" or the abbreviated "1.1.1.1-50".
fn parse_ip_range(s: &str) -> Result<Option<TargetSpec>, EnumerationError> {
    let Some((start_str, end_str)) = s.split_once('-') else {
        return Ok(None);
    };

    let start_addr = start_str
        .trim()
        .parse::<Ipv4Addr>()
        .map_err(|e| EnumerationError::range(s, format!("bad start '{start_str}': {e}")))?;
    let end_addr = parse_range_end(end_str.trim(), start_addr)
        .map_err(|reason| EnumerationError::range(s, reason))?;

    if u32::from(start_addr) > u32::from(end_addr) {
        return Err(EnumerationError::range(s, "range end lies before its start"));
    }

    let ipv4_range = Ipv4Range::new(start_addr, end_addr);
    Ok(Some(TargetSpec::Range { ipv4_range }))
}

/// Missing leading octets of the end address are borrowed from the start.
fn parse_range_end(end_str: &str, start_addr: Ipv4Addr) -> Result<Ipv4Addr, String> {
    if let Ok(full_addr) = end_str.parse::<Ipv4Addr>() {
        return Ok(full_addr);
    }

    let partial: Vec<u8> = end_str
        .split('.')
        .map(str::parse::<u8>)
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| format!("bad end '{end_str}': {e}"))?;

    if partial.len() > 4 {
        return Err(format!("too many octets in '{end_str}'"));
    }

    let mut octets: [u8; 4] = start_addr.octets();
    octets[4 - partial.len()..].copy_from_slice(&partial);
    Ok(Ipv4Addr::from(octets))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn test_range_end_abbreviations() {
        let start = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(parse_range_end("50", start), Ok(Ipv4Addr::new(192, 168, 1, 50)));
        assert_eq!(parse_range_end("2.66", start), Ok(Ipv4Addr::new(192, 168, 2, 66)));
        assert_eq!(parse_range_end("10.2.1", start), Ok(Ipv4Addr::new(192, 10, 2, 1)));
        assert_eq!(
            parse_range_end("192.168.1.50", start),
            Ok(Ipv4Addr::new(192, 168, 1, 50))
        );

        assert!(parse_range_end("2.256", start).is_err());
        assert!(parse_range_end("1.2.3.4.5", start).is_err());
        assert!(parse_range_end("", start).is_err());
    }

    #[test]
    fn test_from_str_forms() {
        assert!(matches!(TargetSpec::from_str("1.1.1.1"), Ok(TargetSpec::Host { .. })));
        assert!(matches!(TargetSpec::from_str("::1"), Ok(TargetSpec::Host { .. })));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.1-10.0.0.255"),
            Ok(TargetSpec::Range { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("192.168.1.1-255"),
            Ok(TargetSpec::Range { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.0/24"),
            Ok(TargetSpec::Range { .. })
        ));
        assert!(matches!(
            TargetSpec::from_str("10.0.0.1, 10.0.0.0/30"),
            Ok(TargetSpec::Multi { .. })
        ));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        for bad in ["", "not-an-ip", "10.0.0.1/33", "10.0.0.256-1.1.1.1", "10.0.0.9-3", ",,"] {
            let result = TargetSpec::from_str(bad);
            assert!(
                matches!(result, Err(EnumerationError::InvalidRange { .. })),
                "{bad:?} parsed as {result:?}"
            );
        }
    }

    #[test]
    fn test_hosts_keep_first_occurrence() {
        let spec = TargetSpec::from_str("10.0.0.2, 10.0.0.0/30, 10.0.0.9").unwrap();
        assert_eq!(
            spec.hosts(),
            vec![v4(10, 0, 0, 2), v4(10, 0, 0, 1), v4(10, 0, 0, 9)]
        );
    }

    #[test]
    fn test_enumerate_cidr() {
        let hosts = enumerate_cidr("192.0.2.0/30").unwrap();
        assert_eq!(hosts, vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(192, 0, 2, 2)]);

        let hosts = enumerate_cidr("10.1.2.3/24").unwrap();
        assert_eq!(hosts.len(), 254);
        assert_eq!(hosts.first(), Some(&Ipv4Addr::new(10, 1, 2, 1)));
        assert_eq!(hosts.last(), Some(&Ipv4Addr::new(10, 1, 2, 254)));
        assert!(hosts.windows(2).all(|w| w[0] < w[1]));

        assert!(enumerate_cidr("10.0.0/8").is_err());
        assert!(enumerate_cidr("10.0.0.0/abc").is_err());
    }

    #[test]
    fn bare_address_enumerates_as_slash_32() {
        assert_eq!(enumerate_cidr("10.0.0.1").unwrap(), vec![Ipv4Addr::new(10, 0, 0, 1)]);
        assert_eq!(enumerate_cidr(" 10.0.0.1 ").unwrap(), enumerate_cidr("10.0.0.1/32").unwrap());
        assert!(enumerate_cidr("::1").is_err());
    }
}
