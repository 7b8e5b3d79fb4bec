use std::time::Duration;

pub const DEFAULT_MAX_CONCURRENCY: usize = 50;

/// The four probe families the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Liveness,
    PortConnect,
    Banner,
    Subdomain,
}

impl ProbeKind {
    pub fn default_timeout(self) -> Duration {
        match self {
            ProbeKind::Liveness | ProbeKind::PortConnect => Duration::from_secs(1),
            ProbeKind::Banner | ProbeKind::Subdomain => Duration::from_secs(3),
        }
    }

    pub fn default_stagger(self) -> Duration {
        match self {
            ProbeKind::Liveness => Duration::from_millis(10),
            _ => Duration::from_millis(1),
        }
    }
}

/// Tunables for a single scan invocation.
///
/// Passed explicitly to the orchestrator and to every probe; there is no
/// process-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Upper bound on probes in flight at any instant. Never below 1.
    pub max_concurrency: usize,
    /// Budget for one probe's network operation.
    pub per_probe_timeout: Duration,
    /// Pause between successive worker launches. Smooths bursts only;
    /// it does not limit concurrency.
    pub stagger_delay: Duration,
}

impl ScanConfig {
    pub fn for_probe(kind: ProbeKind) -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            per_probe_timeout: kind.default_timeout(),
            stagger_delay: kind.default_stagger(),
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.per_probe_timeout = timeout;
        self
    }

    pub fn with_stagger_delay(mut self, stagger_delay: Duration) -> Self {
        self.stagger_delay = stagger_delay;
        self
    }

    /// Concurrency limit as the admission pool sees it.
    pub fn permits(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::for_probe(ProbeKind::Liveness)
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
