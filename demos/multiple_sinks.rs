//! Fan-out example
//!
//! Sends every call to a console, a log file and an in-memory buffer at
//! once. One of the destinations fails on every write to show that the
//! others keep receiving records.
//!
//! Run with: cargo run --example multiple_sinks

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{error, info, warning};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

/// A writer whose device is permanently gone
struct Unplugged;

impl Write for Unplugged {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Multiple Sinks Example ===\n");

    let log_path = std::env::temp_dir().join("multiple_sinks.log");
    let file = File::create(&log_path)?;
    let memory = SharedBuffer::new();

    let fanout = Arc::new(FanoutSink::new([
        stdout_console(),
        Arc::new(StreamSink::new(BufWriter::new(file))) as SharedSink,
        Arc::new(StreamSink::new(memory.clone())) as SharedSink,
        Arc::new(StreamSink::new(Unplugged)) as SharedSink,
    ]));

    let logger = Logger::builder("fanout")
        .level(Level::Debug)
        .shared_sink(fanout.clone())
        .build();

    for i in 1..=3 {
        info!(logger, "Processing batch {}", i);
    }
    warning!(logger, "Queue depth above {}", 100);
    error!(logger, "Batch {} rejected", 4);

    logger.close()?;

    println!("\nFile {} received:", log_path.display());
    print!("{}", std::fs::read_to_string(&log_path)?);

    println!("\nMemory buffer holds {} lines", memory.lines().len());

    let metrics = fanout.metrics();
    println!(
        "Fan-out deliveries: {} ok, {} failed ({:.0}% failure rate)",
        metrics.delivered(),
        metrics.failed(),
        metrics.failure_rate() * 100.0
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
