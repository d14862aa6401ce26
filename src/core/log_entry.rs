//! The unit handed to sinks: a rendered message plus its context

use super::log_context::Context;
use super::log_level::Level;
use std::fmt;

/// One log call as seen by a [`Sink`](super::Sink).
///
/// The message always ends with exactly one newline that the logger
/// guarantees; use [`Record::text`] for the message without it.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    context: &'a Context,
    message: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(context: &'a Context, message: &'a str) -> Self {
        Self { context, message }
    }

    pub fn context(&self) -> &'a Context {
        self.context
    }

    pub fn level(&self) -> Level {
        self.context.level
    }

    /// Message including its trailing newline.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Message with the trailing newline removed.
    pub fn text(&self) -> &'a str {
        self.message.strip_suffix('\n').unwrap_or(self.message)
    }
}

/// Render caller arguments, appending a newline only if one is missing.
///
/// The check applies to the formatted text, so `"{}"` with `"x\n"` also
/// ends in a single newline.
pub fn render_message(args: fmt::Arguments<'_>) -> String {
    let mut message = match args.as_str() {
        Some(literal) => literal.to_owned(),
        None => args.to_string(),
    };
    if !message.ends_with('\n') {
        message.push('\n');
    }
    message
}
