//! # Sweepr Core
//!
//! The bounded-concurrency scan engine.
//!
//! * **[`scanner`]**: the orchestrator, its admission pool and the result aggregator.
//! * **[`probe`]**: one bounded-time network check per target unit.
//! * **[`recon`]**: ping sweep, port scan, banner grab and subdomain brute force,
//!   each wiring an enumerator to a probe through the orchestrator.

pub mod probe;
pub mod recon;
pub mod scanner;

pub use probe::Probe;
pub use scanner::{Orchestrator, ScanProgress, ScanState, run};
