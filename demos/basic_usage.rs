//! Basic logger usage example
//!
//! Demonstrates a named console logger, the six levels and runtime
//! threshold changes, followed by the process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{critical, debug, error, info, notice, warning};

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // A named logger writing colored lines to stdout
    let mut logger = Logger::builder("basic")
        .level(Level::Debug)
        .shared_sink(stdout_console())
        .build();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    notice!(logger, "This is a notice message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    critical!(logger, "This is a critical message");

    println!("\n2. Logging with a higher threshold:");
    logger.set_level(Level::Warning);
    println!("   Threshold set to WARNING - debug, info and notice won't show:");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    notice!(logger, "Notice message (hidden)");
    warning!(logger, "Warning message (visible)");
    critical!(logger, "Critical messages are never filtered");

    println!("\n3. The default logger (stderr, threshold INFO):");
    info!("Default logger says hello from {}", std::process::id());
    debug!("Hidden at the default threshold");
    rust_leveled_logger::set_level(Level::Debug);
    debug!("Visible after lowering the threshold");

    logger.close()?;
    rust_leveled_logger::close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
