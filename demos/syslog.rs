//! Syslog example
//!
//! Logs to the local syslog daemon and mirrors every record to the console.
//! Falls back to the console alone when no daemon is reachable.
//!
//! Run with: cargo run --example syslog

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{debug, error, info, notice};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Syslog Example ===\n");

    let sink: SharedSink = match SyslogSink::new("leveled-demo") {
        Ok(syslog) => {
            println!("Connected to the local syslog daemon\n");
            Arc::new(FanoutSink::new([Arc::new(syslog) as SharedSink, stdout_console()]))
        }
        Err(err) => {
            println!("Syslog unavailable ({err}), using the console only\n");
            stdout_console()
        }
    };

    let logger = Logger::builder("syslog-demo")
        .level(Level::Debug)
        .shared_sink(sink)
        .build();

    debug!(logger, "Maps to syslog severity DEBUG");
    info!(logger, "Maps to syslog severity INFORMATIONAL");
    notice!(logger, "Service {} reloaded its configuration", "demo");
    error!(logger, "Upstream {} refused the connection", "10.0.0.7:514");

    logger.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
