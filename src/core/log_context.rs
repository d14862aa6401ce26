//! Per-call metadata captured when a leveled method fires

use super::log_level::Level;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Source location of the code that called into the logger.
///
/// Captured with `#[track_caller]`. Every function on the path from a public
/// leveled method down to [`CallSite::capture`] must itself be
/// `#[track_caller]`; adding an intermediate function without the attribute
/// makes the reported location point inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// Capture the location of the outermost `#[track_caller]` caller.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Immutable metadata for one log call.
///
/// Built once, before any sink sees the call, so every sink reached by the
/// same call observes the same timestamp and call site.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    pub name: Arc<str>,
    pub level: Level,
    pub time: DateTime<Local>,
    pub call_site: CallSite,
}

impl Context {
    pub fn new(name: Arc<str>, level: Level, call_site: CallSite) -> Self {
        Self {
            name,
            level,
            time: Local::now(),
            call_site,
        }
    }

    /// Replace the timestamp, mostly useful for deterministic output in tests.
    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    /// `"<YYYY-MM-DD HH:MM:SS> <name> <LEVEL padded to 8> "`
    pub fn prefix(&self) -> String {
        format!(
            "{} {} {:<8} ",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.name,
            self.level.name()
        )
    }
}
