//! Core logger types and traits

pub mod error;
pub mod global;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;

pub use error::{LoggerError, Result};
pub use log_context::{CallSite, Context};
pub use log_entry::{render_message, Record};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder, DEFAULT_LEVEL};
pub use metrics::DeliveryMetrics;
pub use sink::{SharedSink, Sink};
