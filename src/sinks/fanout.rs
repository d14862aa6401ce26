//! Fan-out sink: one call, many sinks, delivered concurrently
//!
//! Every child runs on its own scoped thread inside a `catch_unwind`
//! boundary, and the call returns once all children have finished. A child
//! that errors or panics is counted in [`FanoutSink::metrics`] and never
//! stops its siblings or reaches the caller. There is no timeout: a child
//! that hangs blocks the call.

use crate::core::{DeliveryMetrics, Record, Result, SharedSink, Sink};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Per-child result once the fault boundary has been applied
enum Outcome {
    Done,
    Failed,
    Panicked,
}

fn isolate<F>(op: &F, sink: &dyn Sink) -> Outcome
where
    F: Fn(&dyn Sink) -> Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| op(sink))) {
        Ok(Ok(())) => Outcome::Done,
        Ok(Err(_)) => Outcome::Failed,
        Err(_) => Outcome::Panicked,
    }
}

/// Composite sink owning an immutable, ordered list of children.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let audit = SharedBuffer::new();
/// let fanout = FanoutSink::new([
///     Arc::new(StreamSink::new(audit.clone())) as SharedSink,
///     stderr_console(),
/// ]);
///
/// let logger = Logger::builder("api").sink(fanout).build();
/// logger.error(format_args!("upstream timed out"));
///
/// assert!(audit.contents().contains("upstream timed out"));
/// ```
pub struct FanoutSink {
    sinks: Vec<SharedSink>,
    metrics: DeliveryMetrics,
}

impl FanoutSink {
    pub fn new(sinks: impl IntoIterator<Item = SharedSink>) -> Self {
        Self {
            sinks: sinks.into_iter().collect(),
            metrics: DeliveryMetrics::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    /// Per-child outcomes of every `log` and `close` call
    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.metrics
    }

    /// Run `op` against every child concurrently and wait for all of them.
    fn broadcast<F>(&self, op: F)
    where
        F: Fn(&dyn Sink) -> Result<()> + Sync,
    {
        if let [only] = self.sinks.as_slice() {
            self.record(isolate(&op, only.as_ref()));
            return;
        }

        thread::scope(|scope| {
            let op = &op;
            let mut handles = Vec::with_capacity(self.sinks.len());

            for sink in &self.sinks {
                let spawned = thread::Builder::new()
                    .spawn_scoped(scope, move || isolate(op, sink.as_ref()));
                match spawned {
                    Ok(handle) => handles.push(handle),
                    // No thread available: deliver on the calling thread instead
                    Err(_) => self.record(isolate(op, sink.as_ref())),
                }
            }

            for handle in handles {
                self.record(handle.join().unwrap_or(Outcome::Panicked));
            }
        });
    }

    fn record(&self, outcome: Outcome) {
        match outcome {
            Outcome::Done => {
                self.metrics.record_delivered();
            }
            Outcome::Failed => {
                self.metrics.record_failed();
            }
            Outcome::Panicked => {
                self.metrics.record_panicked();
            }
        }
    }
}

impl Sink for FanoutSink {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        self.broadcast(|sink| sink.log(record));
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.broadcast(|sink| sink.close());
        Ok(())
    }

    fn name(&self) -> &str {
        "fanout"
    }
}
