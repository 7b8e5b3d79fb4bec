//! # Sweepr Common
//!
//! Shared vocabulary for the scan engine and its front ends:
//!
//! * **[`network`]**: target enumeration (hosts, ports) and the port → service table.
//! * **[`wordlist`]**: subdomain candidate loading.
//! * **[`unit`]**: the target units handed to probes.
//! * **[`outcome`]**: probe outcomes and the aggregated [`outcome::ResultSet`].
//! * **[`config`]**: scan tunables.
//! * **[`error`]**: configuration errors raised before a scan starts.
//!
//! Nothing in this crate touches the network.

pub mod config;
pub mod error;
pub mod network;
pub mod outcome;
pub mod unit;
pub mod wordlist;
