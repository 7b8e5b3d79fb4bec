//! Result aggregation.
//!
//! Workers never touch the collection: they send outcomes through a
//! [`ResultSink`] and a single collector task owns the vector. Once every
//! sink is dropped the collector stops and [`Aggregator::finish`] hands the
//! outcomes back, in the order they arrived.

use sweepr_common::outcome::{ProbeOutcome, ResultSet};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::error;

pub struct Aggregator {
    collector: JoinHandle<Vec<ProbeOutcome>>,
}

/// Write handle held by workers. `append` is the only way in.
#[derive(Debug, Clone)]
pub struct ResultSink {
    tx: UnboundedSender<ProbeOutcome>,
}

impl Aggregator {
    /// Spawns the collector task. Must be called within a Tokio runtime.
    pub fn start() -> (Self, ResultSink) {
        let (tx, rx) = mpsc::unbounded_channel();
        let collector = tokio::spawn(collect(rx));
        (Self { collector }, ResultSink { tx })
    }

    /// Waits for every sink to be dropped, then freezes the outcomes.
    pub async fn finish(self) -> ResultSet {
        match self.collector.await {
            Ok(outcomes) => ResultSet::from_completed(outcomes),
            Err(e) => {
                error!("Result collector failed: {e}");
                ResultSet::default()
            }
        }
    }
}

impl ResultSink {
    pub fn append(&self, outcome: ProbeOutcome) {
        if let Err(e) = self.tx.send(outcome) {
            error!("Result collector is gone, dropping {:?}", e.0);
        }
    }
}

async fn collect(mut rx: UnboundedReceiver<ProbeOutcome>) -> Vec<ProbeOutcome> {
    let mut outcomes: Vec<ProbeOutcome> = Vec::new();
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }
    outcomes
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
    use std::collections::HashSet;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_recorded_exactly_once() {
        let (aggregator, sink) = Aggregator::start();

        let mut writers = Vec::new();
        for writer in 0..8u16 {
            let sink = sink.clone();
            writers.push(tokio::spawn(async move {
                for i in 0..250u16 {
                    sink.append(ProbeOutcome::OpenPort {
                        port: writer * 1000 + i,
                        service: String::new(),
                    });
                    tokio::task::yield_now().await;
                }
            }));
        }
        drop(sink);
        for writer in writers {
            writer.await.unwrap();
        }

        let results = aggregator.finish().await;
        assert_eq!(results.len(), 2000);
        let unique: HashSet<&ProbeOutcome> = results.iter().collect();
        assert_eq!(unique.len(), 2000);
    }

    #[tokio::test]
    async fn finish_without_appends_is_empty() {
        let (aggregator, sink) = Aggregator::start();
        drop(sink);
        assert!(aggregator.finish().await.is_empty());
    }
}
