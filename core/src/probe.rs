//! Probe functions.
//!
//! A probe performs one bounded-time network operation against one target
//! unit. Transport failures (timeouts, refusals, resolver misses, garbled
//! bytes) are absorbed inside the probe and come back as `None`; nothing a
//! probe does can surface as an error in the orchestrator.

use async_trait::async_trait;
use sweepr_common::outcome::ProbeOutcome;
use sweepr_common::unit::TargetUnit;

pub mod banner;
pub mod liveness;
pub mod port;
pub mod subdomain;

pub use banner::BannerProbe;
pub use liveness::{LivenessMethod, LivenessProbe};
pub use port::PortProbe;
pub use subdomain::{Resolver, SubdomainProbe, SystemResolver};

#[async_trait]
pub trait Probe: Send + Sync + 'static {
    type Unit: TargetUnit;

    /// Checks a single unit. `None` means "nothing to report".
    async fn probe(&self, unit: Self::Unit) -> Option<ProbeOutcome>;
}
