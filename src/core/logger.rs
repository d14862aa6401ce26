//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_context::{CallSite, Context},
    log_entry::{render_message, Record},
    log_level::Level,
    metrics::DeliveryMetrics,
    sink::{SharedSink, Sink},
};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Threshold given to loggers that are not configured otherwise
pub const DEFAULT_LEVEL: Level = Level::Info;

/// A named, leveled logger delegating to exactly one sink.
///
/// Loggers with the same name are independent; there is no registry.
/// Setters take `&mut self`, so a logger shared between threads has to be
/// configured before it is shared (or wrapped in a lock by the caller).
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder("svc")
///     .level(Level::Info)
///     .sink(StreamSink::new(buffer.clone()))
///     .build();
///
/// logger.info(format_args!("start {}", "ok"));
/// logger.debug(format_args!("suppressed"));
///
/// assert!(buffer.contents().ends_with(" svc INFO     start ok\n"));
/// ```
pub struct Logger {
    name: Arc<str>,
    level: Level,
    sink: SharedSink,
    metrics: DeliveryMetrics,
}

impl Logger {
    /// Create a logger at [`DEFAULT_LEVEL`] writing to the shared stderr console sink
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_sink(name, crate::sinks::stderr_console())
    }

    #[must_use]
    pub fn with_sink(name: impl Into<Arc<str>>, sink: SharedSink) -> Self {
        Self {
            name: name.into(),
            level: DEFAULT_LEVEL,
            sink,
            metrics: DeliveryMetrics::new(),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<Arc<str>>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Replace the sink. The previous sink is not closed.
    pub fn set_sink(&mut self, sink: SharedSink) {
        self.sink = sink;
    }

    /// Outcomes of calls delivered to this logger's sink
    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.level.allows(level)
    }

    /// Log at `level`. Nothing is formatted or captured when the level is
    /// suppressed.
    #[track_caller]
    #[inline]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(level, args, CallSite::capture());
    }

    /// Build the context, render the message and hand both to the sink.
    ///
    /// Sink errors and panics are absorbed here and counted in the metrics.
    fn dispatch(&self, level: Level, args: fmt::Arguments<'_>, call_site: CallSite) {
        let context = Context::new(Arc::clone(&self.name), level, call_site);
        let message = render_message(args);
        let record = Record::new(&context, &message);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.sink.log(&record)));
        match outcome {
            Ok(Ok(())) => {
                self.metrics.record_delivered();
            }
            Ok(Err(_)) => {
                self.metrics.record_failed();
            }
            Err(_) => {
                self.metrics.record_panicked();
            }
        }
    }

    #[track_caller]
    #[inline]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Critical, args);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, args);
    }

    #[track_caller]
    #[inline]
    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Notice, args);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Log at CRITICAL, close the sink and exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.critical(args);
        let _ = self.close();
        std::process::exit(1)
    }

    /// Log at CRITICAL, close the sink and panic with the formatted message.
    ///
    /// Unlike [`Logger::fatal`] the panic can be caught with
    /// `std::panic::catch_unwind`; its payload is the message as a `String`.
    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.critical(args);
        let _ = self.close();
        panic::panic_any(message)
    }

    /// Close the configured sink.
    pub fn close(&self) -> Result<()> {
        panic::catch_unwind(AssertUnwindSafe(|| self.sink.close()))
            .unwrap_or_else(|payload| Err(LoggerError::sink_panicked(self.sink.name(), &*payload)))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .level(Level::Debug)
///     .sink(ConsoleSink::stdout())
///     .build();
/// assert_eq!(logger.level(), Level::Debug);
/// ```
pub struct LoggerBuilder {
    name: Arc<str>,
    level: Level,
    sink: Option<SharedSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            level: DEFAULT_LEVEL,
            sink: None,
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set a sink that is shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger, falling back to the shared stderr console sink
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(crate::sinks::stderr_console);
        let mut logger = Logger::with_sink(self.name, sink);
        logger.set_level(self.level);
        logger
    }
}
