//! The scan **orchestrator**.
//!
//! Fans a list of target units out to one worker each, gates every worker
//! through the [`admission`] pool, funnels successful outcomes into the
//! [`aggregator`] and returns once every unit has been attempted.
//!
//! Lifecycle: `Idle → Dispatching → AwaitingCompletion → Done`. There is no
//! retry and no cancellation; a run always attempts every unit it was given.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use sweepr_common::config::ScanConfig;
use sweepr_common::outcome::ResultSet;
use tokio::task::JoinSet;
use tracing::{Instrument, debug, debug_span, error, info};

use crate::probe::Probe;

pub mod admission;
pub mod aggregator;

use admission::AdmissionController;
use aggregator::{Aggregator, ResultSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Dispatching,
    AwaitingCompletion,
    Done,
}

/// Snapshot sent to the progress callback after each worker finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub attempted: usize,
    pub found: usize,
    pub total: usize,
}

pub type ProgressCallback = Arc<dyn Fn(ScanProgress) + Send + Sync>;

/// Drives one scan. Consumed by [`Orchestrator::run`], so a finished scan
/// cannot be restarted.
pub struct Orchestrator {
    config: ScanConfig,
    state: ScanState,
    on_progress: Option<ProgressCallback>,
}

impl Orchestrator {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            state: ScanState::Idle,
            on_progress: None,
        }
    }

    /// Registers a callback that observes progress. It never affects scheduling.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Probes every unit exactly once and returns the successful outcomes in
    /// completion order.
    ///
    /// Workers are launched in unit order, `stagger_delay` apart, and at most
    /// `max_concurrency` of them are inside `probe` at any instant.
    pub async fn run<P: Probe>(mut self, units: Vec<P::Unit>, probe: P) -> ResultSet {
        let total: usize = units.len();
        let started: Instant = Instant::now();
        let probe: Arc<P> = Arc::new(probe);
        let admission = AdmissionController::new(self.config.permits());
        let tracker = Arc::new(Tracker::new(total, self.on_progress.clone()));
        let (aggregator, sink) = Aggregator::start();

        self.transition(ScanState::Dispatching);
        let mut workers: JoinSet<()> = JoinSet::new();
        for (idx, unit) in units.into_iter().enumerate() {
            if idx > 0 && !self.config.stagger_delay.is_zero() {
                tokio::time::sleep(self.config.stagger_delay).await;
            }

            let span = debug_span!("probe", unit = %unit);
            let worker = Worker {
                probe: probe.clone(),
                admission: admission.clone(),
                sink: sink.clone(),
                tracker: tracker.clone(),
            };
            workers.spawn(worker.run(unit).instrument(span));
        }
        drop(sink);

        self.transition(ScanState::AwaitingCompletion);
        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!("Probe worker failed: {e}");
            }
        }

        let results: ResultSet = aggregator.finish().await;
        self.transition(ScanState::Done);

        info!(
            "Scan finished: {}/{} units produced results in {:.2}s",
            results.len(),
            total,
            started.elapsed().as_secs_f64()
        );
        results
    }

    fn transition(&mut self, next: ScanState) {
        debug!("Scan state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Convenience wrapper: `Orchestrator::new(*config).run(units, probe)`.
pub async fn run<P: Probe>(units: Vec<P::Unit>, probe: P, config: &ScanConfig) -> ResultSet {
    Orchestrator::new(*config).run(units, probe).await
}

struct Worker<P> {
    probe: Arc<P>,
    admission: AdmissionController,
    sink: ResultSink,
    tracker: Arc<Tracker>,
}

impl<P: Probe> Worker<P> {
    async fn run(self, unit: P::Unit) {
        let permit = match self.admission.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                error!("No admission for {unit}: {e}");
                return;
            }
        };

        let outcome = self.probe.probe(unit).await;
        let found: bool = outcome.is_some();
        if let Some(outcome) = outcome {
            self.sink.append(outcome);
        }
        permit.release();

        self.tracker.record(found);
    }
}

struct Tracker {
    attempted: AtomicUsize,
    found: AtomicUsize,
    total: usize,
    on_progress: Option<ProgressCallback>,
}

impl Tracker {
    fn new(total: usize, on_progress: Option<ProgressCallback>) -> Self {
        Self {
            attempted: AtomicUsize::new(0),
            found: AtomicUsize::new(0),
            total,
            on_progress,
        }
    }

    fn record(&self, found: bool) {
        let found: usize = if found {
            self.found.fetch_add(1, Ordering::Relaxed) + 1
        } else {
            self.found.load(Ordering::Relaxed)
        };
        let attempted: usize = self.attempted.fetch_add(1, Ordering::Relaxed) + 1;

        if let Some(callback) = &self.on_progress {
            callback(ScanProgress {
                attempted,
                found,
                total: self.total,
            });
        }
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
