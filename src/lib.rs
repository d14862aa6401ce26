//! # Rust Leveled Logger
//!
//! Named, leveled loggers that route formatted messages to pluggable sinks.
//!
//! ## Features
//!
//! - **Six levels**: CRITICAL, ERROR, WARNING, NOTICE, INFO, DEBUG
//! - **Call-site capture**: every record knows the file and line that logged it
//! - **Sinks**: plain streams, ANSI-colored consoles, syslog
//! - **Fan-out**: deliver one call to many sinks concurrently, isolating failures
//! - **Default logger**: free functions and macros for code without its own logger
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder("svc")
//!     .level(Level::Info)
//!     .sink(StreamSink::new(buffer.clone()))
//!     .build();
//!
//! info!(logger, "start {}", "ok");
//! assert!(buffer.contents().ends_with("svc INFO     start ok\n"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::global::default_logger;
    pub use crate::core::{
        CallSite, Context, DeliveryMetrics, Level, Logger, LoggerBuilder, LoggerError, Record,
        Result, SharedSink, Sink, DEFAULT_LEVEL,
    };
    pub use crate::sinks::{
        stderr_console, stdout_console, ConsoleSink, FanoutSink, SharedBuffer, StreamSink,
    };

    #[cfg(feature = "syslog")]
    pub use crate::sinks::SyslogSink;
}

pub use crate::core::global::{
    close, critical, debug, default_logger, error, fatal, info, log, notice, panic, set_level,
    set_sink, warning,
};
pub use crate::core::{
    CallSite, Context, DeliveryMetrics, Level, Logger, LoggerBuilder, LoggerError, Record, Result,
    SharedSink, Sink, DEFAULT_LEVEL,
};
pub use crate::sinks::{ConsoleSink, FanoutSink, SharedBuffer, StreamSink};

#[cfg(feature = "syslog")]
pub use crate::sinks::SyslogSink;
