//! Sink trait for log output destinations

use super::{error::Result, log_entry::Record};
use std::sync::Arc;

/// A pluggable output destination.
///
/// Sinks take `&self` so that a [`FanoutSink`](crate::sinks::FanoutSink) can
/// drive several of them from different threads at once; implementations
/// guard their resource with interior locking.
///
/// `close` releases the owned resource. Every sink reachable from one
/// `Logger::close` is closed exactly once; calling it again is not required
/// to be meaningful.
pub trait Sink: Send + Sync {
    fn log(&self, record: &Record<'_>) -> Result<()>;
    fn close(&self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink shared between loggers (and fan-out sinks).
pub type SharedSink = Arc<dyn Sink>;

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        (**self).log(record)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        (**self).log(record)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
