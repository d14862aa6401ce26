//! Delivery metrics
//!
//! Sinks never surface delivery failures to the code that logs, so failures
//! are counted here instead. A [`Logger`](crate::Logger) counts outcomes of
//! its sink; a [`FanoutSink`](crate::sinks::FanoutSink) counts outcomes per
//! child call.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for delivered, failed and panicked sink calls
///
/// # Example
///
/// ```
/// use rust_leveled_logger::DeliveryMetrics;
///
/// let metrics = DeliveryMetrics::new();
/// metrics.record_delivered();
/// metrics.record_failed();
///
/// assert_eq!(metrics.delivered(), 1);
/// assert_eq!(metrics.failed(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct DeliveryMetrics {
    /// Calls the sink accepted
    delivered: AtomicU64,

    /// Calls that returned an error
    failed: AtomicU64,

    /// Calls that panicked; these also count as failed
    panicked: AtomicU64,
}

impl DeliveryMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            panicked: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn panicked(&self) -> u64 {
        self.panicked.load(Ordering::Relaxed)
    }

    /// Record a successful delivery, returning the previous count
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed delivery, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a panic, which is also counted as a failure
    #[inline]
    pub fn record_panicked(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.panicked.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been recorded.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed() as f64;
        let total = self.delivered() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.panicked.store(0, Ordering::Relaxed);
    }
}

impl Default for DeliveryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DeliveryMetrics {
    /// Create a snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered()),
            failed: AtomicU64::new(self.failed()),
            panicked: AtomicU64::new(self.panicked()),
        }
    }
}
