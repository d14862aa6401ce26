//! In-memory stream destination

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A clonable in-memory byte buffer.
///
/// All clones share the same storage, so one clone can be moved into a
/// [`StreamSink`](super::StreamSink) while another reads what was written.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder("app")
///     .sink(StreamSink::new(buffer.clone()))
///     .build();
///
/// logger.warning(format_args!("low disk"));
/// assert_eq!(buffer.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Written bytes as text, replacing invalid UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
