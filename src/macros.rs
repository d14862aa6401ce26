//! Logging macros for ergonomic log message formatting.
//!
//! Every leveled macro has two forms: `info!(logger, "...", args)` logs
//! through the given logger, `info!("...", args)` through the process-wide
//! default logger. Arguments are only formatted when the level is enabled,
//! and the reported call site is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, warning};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder("server")
//!     .sink(StreamSink::new(buffer.clone()))
//!     .build();
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! warning!(logger, "{} connections pending", 3);
//!
//! assert_eq!(buffer.lines().len(), 2);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder("doc").sink(StreamSink::new(SharedBuffer::new())).build();
/// use rust_leveled_logger::log;
/// log!(logger, Level::Notice, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! critical {
    ($fmt:literal $($arg:tt)*) => {
        $crate::critical(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::error(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::warning(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! notice {
    ($fmt:literal $($arg:tt)*) => {
        $crate::notice(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.notice(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder("doc").sink(StreamSink::new(SharedBuffer::new())).build();
/// use rust_leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::info(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::debug(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log at CRITICAL, close the sink and exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::fatal(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

/// Log at CRITICAL, close the sink and panic with the message.
///
/// Named `log_panic!` so it does not shadow `std::panic!` when imported.
#[macro_export]
macro_rules! log_panic {
    ($fmt:literal $($arg:tt)*) => {
        $crate::panic(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(format_args!($($arg)+))
    };
}
