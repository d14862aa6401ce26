//! Stream sink implementation

use crate::core::{Record, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes `prefix + message` to any byte stream.
///
/// Each call is a single `write_all` followed by a flush, performed under
/// the sink's lock, so concurrent calls never interleave within a line.
/// `close` only flushes: the stream may be stdio the sink does not own.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take back the underlying stream
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub(crate) fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

/// `"<YYYY-MM-DD HH:MM:SS> <name> <LEVEL padded to 8> <message>"`
pub fn format_line(record: &Record<'_>) -> String {
    let mut line = record.context().prefix();
    line.push_str(record.message());
    line
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        self.write_bytes(format_line(record).as_bytes())
    }

    fn close(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{render_message, CallSite, Context, Level, LoggerError};
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    fn context(level: Level) -> Context {
        let time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        Context::new(Arc::from("svc"), level, CallSite::capture()).with_time(time)
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_prefixed_line() {
        let sink = StreamSink::new(Vec::new());
        let context = context(Level::Info);
        let message = render_message(format_args!("start {}", "ok"));
        sink.log(&Record::new(&context, &message)).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "2024-01-02 03:04:05 svc INFO     start ok\n");
    }

    #[test]
    fn test_lines_accumulate_in_order() {
        let sink = StreamSink::new(Vec::new());
        let context = context(Level::Warning);
        for text in ["a", "b\n", "c"] {
            let message = render_message(format_args!("{text}"));
            sink.log(&Record::new(&context, &message)).unwrap();
        }

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("WARNING  b"));
        assert!(output.ends_with("c\n"));
    }

    #[test]
    fn test_write_error_is_returned() {
        let sink = StreamSink::new(FailingWriter);
        let context = context(Level::Error);
        let message = render_message(format_args!("lost"));
        let err = sink.log(&Record::new(&context, &message)).unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_close_does_not_consume_stream() {
        let sink = StreamSink::new(Vec::new());
        sink.close().unwrap();
        let context = context(Level::Info);
        let message = render_message(format_args!("after close"));
        sink.log(&Record::new(&context, &message)).unwrap();
        assert!(!sink.into_inner().is_empty());
    }
}
