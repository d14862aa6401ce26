//! Console sink implementation

use super::stream::{format_line, StreamSink};
use crate::core::{Record, Result, SharedSink, Sink};
use std::io::{self, Write};
use std::sync::{Arc, LazyLock};

/// ANSI SGR reset sequence written after every message
pub const RESET: &str = "\x1b[0m";

/// A [`StreamSink`] that wraps every message in ANSI color escapes.
///
/// Output is `ESC[<code>m` + prefixed message + `ESC[0m`, where the code is
/// the foreground color of the record's level.
pub struct ConsoleSink<W: Write + Send> {
    stream: StreamSink<W>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            stream: StreamSink::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ConsoleSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        let output = format!(
            "\x1b[{}m{}{}",
            record.level().color().to_fg_str(),
            format_line(record),
            RESET
        );
        self.stream.write_bytes(output.as_bytes())
    }

    fn close(&self) -> Result<()> {
        self.stream.close()
    }

    fn name(&self) -> &str {
        "console"
    }
}

static STDOUT_CONSOLE: LazyLock<SharedSink> = LazyLock::new(|| -> SharedSink {
    Arc::new(ConsoleSink::stdout())
});
static STDERR_CONSOLE: LazyLock<SharedSink> = LazyLock::new(|| -> SharedSink {
    Arc::new(ConsoleSink::stderr())
});

/// The process-wide console sink bound to standard output
pub fn stdout_console() -> SharedSink {
    Arc::clone(&STDOUT_CONSOLE)
}

/// The process-wide console sink bound to standard error
pub fn stderr_console() -> SharedSink {
    Arc::clone(&STDERR_CONSOLE)
}
