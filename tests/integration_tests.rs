//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - End-to-end stream output format
//! - Threshold filtering
//! - Newline handling
//! - Call-site attribution
//! - Console escape sequences
//! - File output and concurrent logging
//! - Fatal and panic control flow

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{error, info};
use std::fs;
use std::io::{BufWriter, Write};
use std::sync::Arc;
use std::thread;

/// Keeps a copy of every context it receives
#[derive(Default)]
struct CaptureSink {
    records: Mutex<Vec<(Context, String)>>,
}

impl CaptureSink {
    fn last(&self) -> (Context, String) {
        self.records.lock().last().cloned().expect("nothing captured")
    }
}

impl Sink for CaptureSink {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        self.records
            .lock()
            .push((record.context().clone(), record.message().to_string()));
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

fn buffered(name: &str, level: Level) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder(name)
        .level(level)
        .sink(StreamSink::new(buffer.clone()))
        .build();
    (logger, buffer)
}

#[test]
fn test_end_to_end_stream_line() {
    let (logger, buffer) = buffered("svc", Level::Info);

    logger.info(format_args!("start {}", "ok"));

    let output = buffer.contents();
    assert_eq!(buffer.lines().len(), 1);
    let (timestamp, rest) = output.split_at(19);
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .expect("timestamp with second precision");
    assert_eq!(rest, " svc INFO     start ok\n");
}

#[test]
fn test_threshold_warning_filters_lower_levels() {
    let (logger, buffer) = buffered("svc", Level::Warning);

    logger.debug(format_args!("Debug message"));
    logger.info(format_args!("Info message"));
    logger.notice(format_args!("Notice message"));
    assert!(buffer.is_empty());

    logger.warning(format_args!("Warning message"));
    logger.error(format_args!("Error message"));
    logger.critical(format_args!("Critical message"));

    let content = buffer.contents();
    assert!(content.contains("WARNING  Warning message"));
    assert!(content.contains("ERROR    Error message"));
    assert!(content.contains("CRITICAL Critical message"));
    assert_eq!(buffer.lines().len(), 3);
}

#[test]
fn test_set_level_at_runtime() {
    let (mut logger, buffer) = buffered("svc", Level::Info);
    logger.debug(format_args!("before"));
    logger.set_level(Level::Debug);
    logger.debug(format_args!("after"));

    let content = buffer.contents();
    assert!(!content.contains("before"));
    assert!(content.contains("DEBUG    after"));
}

#[test]
fn test_single_trailing_newline() {
    let (logger, buffer) = buffered("nl", Level::Info);
    logger.info(format_args!("hello"));
    logger.info(format_args!("hello\n"));

    let content = buffer.contents();
    assert!(!content.contains("\n\n"));
    assert_eq!(buffer.lines().len(), 2);
    assert!(content.ends_with("hello\n"));
}

#[test]
fn test_call_site_points_at_caller() {
    let capture = Arc::new(CaptureSink::default());
    let logger = Logger::with_sink("site", capture.clone());

    let expected = line!() + 1;
    logger.warning(format_args!("method"));
    let (context, _) = capture.last();
    assert_eq!(context.call_site.file, file!());
    assert_eq!(context.call_site.line, expected);

    let expected = line!() + 1;
    error!(logger, "macro {}", 1);
    let (context, message) = capture.last();
    assert_eq!(context.call_site.line, expected);
    assert_eq!(context.level, Level::Error);
    assert_eq!(message, "macro 1\n");

    let expected = line!() + 1;
    logger.log(Level::Notice, format_args!("explicit level"));
    assert_eq!(capture.last().0.call_site.line, expected);
}

#[test]
fn test_context_captured_at_call_time() {
    let capture = Arc::new(CaptureSink::default());
    let logger = Logger::with_sink("clock", capture.clone());

    let before = Local::now();
    info!(logger, "tick");
    let after = Local::now();

    let (context, _) = capture.last();
    assert!(context.time >= before && context.time <= after);
    assert_eq!(&*context.name, "clock");
}

#[test]
fn test_console_sink_brackets_error_output() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder("tty")
        .sink(ConsoleSink::new(buffer.clone()))
        .build();

    logger.error(format_args!("failed: {}", "eof"));

    let bytes = buffer.bytes();
    assert!(bytes.starts_with(b"\x1b[31m"));
    assert!(bytes.ends_with(b" tty ERROR    failed: eof\n\x1b[0m"));
}

#[test]
fn test_file_sink() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let file = fs::File::create(&log_file).expect("Failed to create log file");
    let logger = Logger::builder("file")
        .level(Level::Debug)
        .sink(StreamSink::new(BufWriter::new(file)))
        .build();

    for i in 0..10 {
        logger.debug(format_args!("Message {}", i));
    }
    logger.close().expect("Failed to close");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[9].ends_with("file DEBUG    Message 9"));
}

#[test]
fn test_write_failures_do_not_reach_caller() {
    struct Refusing;

    impl Write for Refusing {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let logger = Logger::builder("lossy").sink(StreamSink::new(Refusing)).build();
    for _ in 0..5 {
        logger.info(format_args!("dropped"));
    }

    assert_eq!(logger.metrics().failed(), 5);
    assert_eq!(logger.metrics().delivered(), 0);
}

#[test]
fn test_concurrent_logging_keeps_lines_intact() {
    let (logger, buffer) = buffered("mt", Level::Info);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..20 {
                    logger.info(format_args!("Thread {} - Message {}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 100);
    for line in &lines {
        assert!(line.contains(" mt INFO     Thread "), "{line}");
    }
}

#[test]
fn test_same_name_loggers_are_independent() {
    let (mut first, first_buffer) = buffered("dup", Level::Info);
    let (second, second_buffer) = buffered("dup", Level::Info);

    first.set_level(Level::Critical);
    first.info(format_args!("quiet"));
    second.info(format_args!("loud"));

    assert!(first_buffer.is_empty());
    assert_eq!(second_buffer.lines().len(), 1);
}

#[test]
fn test_panic_is_catchable_and_closes_sink() {
    let (logger, buffer) = buffered("svc", Level::Info);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic(format_args!("invariant broken: {}", 42));
    }));

    let payload = result.expect_err("panic must unwind");
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("invariant broken: 42")
    );
    assert!(buffer.contents().contains("CRITICAL invariant broken: 42\n"));
}

const FATAL_CHILD_ENV: &str = "RUST_LEVELED_LOGGER_FATAL_CHILD";

#[test]
fn test_fatal_exits_with_status_one() {
    if std::env::var_os(FATAL_CHILD_ENV).is_some() {
        let logger = Logger::builder("child").sink(StreamSink::stdout()).build();
        logger.fatal(format_args!("going down {}", 1));
    }

    let output = std::process::Command::new(std::env::current_exe().expect("test binary"))
        .args(["--exact", "test_fatal_exits_with_status_one", "--nocapture"])
        .env(FATAL_CHILD_ENV, "1")
        .output()
        .expect("Failed to spawn child");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" child CRITICAL going down 1\n"), "{stdout}");
}
