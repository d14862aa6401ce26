//! Process-wide default logger
//!
//! The default logger is created on first use with an empty name, the
//! [`DEFAULT_LEVEL`](super::DEFAULT_LEVEL) threshold and the shared stderr
//! console sink. It lives for the rest of the process and is never
//! re-created. Code that needs isolation should hold its own [`Logger`].
//!
//! Logging functions take a read lock; [`set_level`] and [`set_sink`] take a
//! write lock and therefore wait for in-flight calls to finish.

use super::{error::Result, log_level::Level, logger::Logger, sink::SharedSink};
use parking_lot::{RwLock, RwLockReadGuard};
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<RwLock<Logger>> = LazyLock::new(|| RwLock::new(Logger::new("")));

/// Borrow the default logger.
///
/// Do not hold the guard across calls to [`set_level`] or [`set_sink`] on
/// the same thread; they would deadlock.
pub fn default_logger() -> RwLockReadGuard<'static, Logger> {
    DEFAULT_LOGGER.read()
}

pub fn set_level(level: Level) {
    DEFAULT_LOGGER.write().set_level(level);
}

pub fn set_sink(sink: SharedSink) {
    DEFAULT_LOGGER.write().set_sink(sink);
}

pub fn close() -> Result<()> {
    default_logger().close()
}

#[track_caller]
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    default_logger().log(level, args);
}

#[track_caller]
pub fn critical(args: fmt::Arguments<'_>) {
    default_logger().critical(args);
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    default_logger().error(args);
}

#[track_caller]
pub fn warning(args: fmt::Arguments<'_>) {
    default_logger().warning(args);
}

#[track_caller]
pub fn notice(args: fmt::Arguments<'_>) {
    default_logger().notice(args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    default_logger().info(args);
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    default_logger().debug(args);
}

#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatal(args)
}

#[track_caller]
pub fn panic(args: fmt::Arguments<'_>) -> ! {
    default_logger().panic(args)
}
