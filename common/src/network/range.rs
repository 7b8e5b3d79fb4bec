//! # IPv4 Range Model
//!
//! Continuous, inclusive ranges of IPv4 addresses and the CIDR arithmetic
//! that produces them.

use std::net::{IpAddr, Ipv4Addr};

use pnet::ipnetwork::Ipv4Network;

use crate::error::EnumerationError;

/// A continuous range of IPv4 addresses, inclusive on both ends.
///
/// A range whose start lies above its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Addresses in ascending numeric order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn to_iter(&self) -> impl Iterator<Item = IpAddr> {
        self.iter().map(IpAddr::V4)
    }

    pub fn len(&self) -> u64 {
        let start: u64 = u32::from(self.start_addr).into();
        let end: u64 = u32::from(self.end_addr).into();
        (end + 1).saturating_sub(start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The whole block for `ip/prefix`, network and broadcast included.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, EnumerationError> {
    let network = Ipv4Network::new(ip, prefix)
        .map_err(|e| EnumerationError::range(&format!("{ip}/{prefix}"), e.to_string()))?;
    Ok(Ipv4Range::new(network.network(), network.broadcast()))
}

/// The usable hosts of `ip/prefix`.
///
/// Network and broadcast addresses are stripped. A `/31` is a point-to-point
/// link where both addresses are hosts, and a `/32` is the host itself.
pub fn cidr_hosts(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, EnumerationError> {
    let block: Ipv4Range = cidr_range(ip, prefix)?;
    if prefix >= 31 {
        return Ok(block);
    }

    let start: u32 = u32::from(block.start_addr) + 1;
    let end: u32 = u32::from(block.end_addr) - 1;
    Ok(Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end)))
}

/// Number of usable hosts in a block of the given prefix length.
pub fn usable_host_count(prefix: u8) -> u64 {
    match prefix {
        32 => 1,
        31 => 2,
        p if p < 31 => (1u64 << (32 - p)) - 2,
        _ => 0,
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
