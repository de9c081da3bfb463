//! Progress events emitted during extraction
//!
//! The extractor never prints. It reports each step as an [`Event`] to an
//! [`EventSink`], and the caller decides how to present it.

use chrono::{DateTime, Local};
use std::fmt;

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Glyph prefixed to the message when displayed
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Severity::Info => None,
            Severity::Success => Some("✓"),
            Severity::Warning => Some("⚠"),
            Severity::Error => Some("✗"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// A single progress event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl Event {
    /// Create an event stamped with the current local time
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

impl fmt::Display for Event {
    /// Formats as `[HH:MM:SS] <glyph> message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.timestamp.format("%H:%M:%S"))?;
        if let Some(glyph) = self.severity.glyph() {
            write!(f, "{} ", glyph)?;
        }
        f.write_str(&self.message)
    }
}

/// Consumer of extraction events
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<F> EventSink for F
where
    F: FnMut(Event),
{
    fn emit(&mut self, event: Event) {
        self(event)
    }
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: Event) {
        match event.severity {
            Severity::Info | Severity::Success => log::info!("{}", event.message),
            Severity::Warning => log::warn!("{}", event.message),
            Severity::Error => log::error!("{}", event.message),
        }
    }
}
