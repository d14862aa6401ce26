//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A sink could not reach its destination at construction time
    #[error("Failed to connect to {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// A sink was used after its resource was released
    #[error("Sink '{sink}' is closed")]
    SinkClosed { sink: String },

    /// A sink panicked while handling a call
    #[error("Sink '{sink}' panicked: {message}")]
    SinkPanicked { sink: String, message: String },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a connection error naming the unreachable target
    pub fn connection(target: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Connection {
            target: target.into(),
            source,
        }
    }

    pub fn sink_closed(sink: impl Into<String>) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }

    /// Build a panic error from a `catch_unwind` payload
    pub fn sink_panicked(sink: impl Into<String>, payload: &(dyn std::any::Any + Send)) -> Self {
        LoggerError::SinkPanicked {
            sink: sink.into(),
            message: panic_message(payload),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Extract the text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
