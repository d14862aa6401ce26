//! Syslog sink implementation
//!
//! Messages are framed as RFC 3164 and sent through a `fasyslog` sender,
//! with the caller's tag as the application name.

use crate::core::{Level, LoggerError, Record, Result, Sink};
use fasyslog::format::SyslogContext;
use fasyslog::sender::SyslogSender;
use fasyslog::Severity;
use parking_lot::Mutex;
use std::io;
use std::net::ToSocketAddrs;

/// Local syslog sockets tried by [`SyslogSink::new`], in order
#[cfg(unix)]
pub const WELL_KNOWN_SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Syslog severity used for each level.
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Critical => Severity::CRITICAL,
        Level::Error => Severity::ERROR,
        Level::Warning => Severity::WARNING,
        Level::Notice => Severity::NOTICE,
        Level::Info => Severity::INFORMATIONAL,
        Level::Debug => Severity::DEBUG,
    }
}

/// Sends each record to the system log at the severity matching its level.
///
/// # Example
///
/// ```no_run
/// use rust_leveled_logger::prelude::*;
/// use rust_leveled_logger::sinks::SyslogSink;
///
/// let sink = SyslogSink::new("my-daemon").expect("syslog unreachable");
/// let logger = Logger::builder("daemon").sink(sink).build();
/// logger.notice(format_args!("configuration reloaded"));
/// logger.close().ok();
/// ```
pub struct SyslogSink {
    sender: Mutex<Option<SyslogSender>>,
    context: SyslogContext,
}

impl SyslogSink {
    /// Connect to the local syslog daemon through the first reachable
    /// well-known socket.
    #[cfg(unix)]
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let mut last_error = None;
        for path in WELL_KNOWN_SOCKETS {
            match fasyslog::sender::unix(path) {
                Ok(sender) => return Ok(Self::with_sender(sender, tag)),
                Err(err) => last_error = Some(err),
            }
        }
        let source = last_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no syslog socket"));
        Err(LoggerError::connection("local syslog", source))
    }

    /// Connect to the syslog daemon listening on the well-known UDP port.
    #[cfg(not(unix))]
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let sender = fasyslog::sender::udp_well_known()
            .map_err(|err| LoggerError::connection("udp syslog", err))?;
        Ok(Self::with_sender(SyslogSender::Udp(sender), tag))
    }

    /// Connect to the Unix socket at `path`.
    #[cfg(unix)]
    pub fn unix(path: impl AsRef<std::path::Path>, tag: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let sender = fasyslog::sender::unix(path)
            .map_err(|err| LoggerError::connection(path.display().to_string(), err))?;
        Ok(Self::with_sender(sender, tag))
    }

    pub fn tcp<A: ToSocketAddrs>(addr: A, tag: impl Into<String>) -> Result<Self> {
        let sender = fasyslog::sender::tcp(addr)
            .map_err(|err| LoggerError::connection("tcp syslog", err))?;
        Ok(Self::with_sender(SyslogSender::Tcp(sender), tag))
    }

    pub fn udp<L: ToSocketAddrs, R: ToSocketAddrs>(
        local: L,
        remote: R,
        tag: impl Into<String>,
    ) -> Result<Self> {
        let sender = fasyslog::sender::udp(local, remote)
            .map_err(|err| LoggerError::connection("udp syslog", err))?;
        Ok(Self::with_sender(SyslogSender::Udp(sender), tag))
    }

    /// Wrap an already connected sender.
    pub fn with_sender(sender: SyslogSender, tag: impl Into<String>) -> Self {
        let mut context = SyslogContext::default();
        context.appname(tag.into());
        Self {
            sender: Mutex::new(Some(sender)),
            context,
        }
    }
}

impl Sink for SyslogSink {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        let frame = self
            .context
            .format_rfc3164(severity_for(record.level()), Some(record.text()))
            .to_string();

        let mut sender = self.sender.lock();
        let sender = sender
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed("syslog"))?;
        sender.send_formatted(frame.as_bytes())?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(mut sender) = self.sender.lock().take() {
            sender.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
