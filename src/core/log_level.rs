//! Log level definitions
//!
//! Levels are ordered from most to least severe. A logger's threshold is a
//! verbosity cutoff: a call at `level` fires when `level <= threshold`.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Level {
    Critical = 0,
    Error = 1,
    Warning = 2,
    Notice = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Level; 6] = [
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Foreground color used by console sinks.
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Critical => Magenta,
            Level::Error => Red,
            Level::Warning => Yellow,
            Level::Notice => Green,
            Level::Info => White,
            Level::Debug => Cyan,
        }
    }

    /// Returns true if a threshold of `self` lets a call at `level` through.
    #[inline]
    pub fn allows(self, level: Level) -> bool {
        level <= self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" | "CRIT" | "FATAL" => Ok(Level::Critical),
            "ERROR" | "ERR" => Ok(Level::Error),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
