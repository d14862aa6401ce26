//! Sink implementations

pub mod buffer;
pub mod console;
pub mod fanout;
pub mod stream;

#[cfg(feature = "syslog")]
pub mod syslog;

pub use buffer::SharedBuffer;
pub use console::{stderr_console, stdout_console, ConsoleSink};
pub use fanout::FanoutSink;
pub use stream::{format_line, StreamSink};

#[cfg(feature = "syslog")]
pub use syslog::SyslogSink;

// Re-export the trait so sink authors need a single import
pub use crate::core::{SharedSink, Sink};
