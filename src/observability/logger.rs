//! Structured JSON logger
//!
//! - One log line = one event, one JSON object
//! - `event` first, `severity` second, other fields sorted by key
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Warn and Error go to stderr
    fn uses_stderr(&self) -> bool {
        *self >= Severity::Warn
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single structured log event
///
/// ```ignore
/// LogLine::info("QUERY_EXECUTE_BEGIN").field("table", "users").emit();
/// ```
#[derive(Debug, Clone)]
pub struct LogLine {
    severity: Severity,
    event: String,
    fields: Vec<(String, String)>,
}

impl LogLine {
    pub fn new(severity: Severity, event: impl Into<String>) -> Self {
        Self {
            severity,
            event: event.into(),
            fields: Vec::new(),
        }
    }

    pub fn trace(event: impl Into<String>) -> Self {
        Self::new(Severity::Trace, event)
    }

    pub fn info(event: impl Into<String>) -> Self {
        Self::new(Severity::Info, event)
    }

    pub fn warn(event: impl Into<String>) -> Self {
        Self::new(Severity::Warn, event)
    }

    pub fn error(event: impl Into<String>) -> Self {
        Self::new(Severity::Error, event)
    }

    /// Adds a field
    pub fn field(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Adds several fields
    pub fn fields<'f>(mut self, fields: impl IntoIterator<Item = &'f (String, String)>) -> Self {
        self.fields.extend(fields.into_iter().cloned());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Renders the line, including the trailing newline
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(64 + self.fields.len() * 32);

        output.push_str("{\"event\":");
        output.push_str(&json_string(&self.event));
        output.push_str(",\"severity\":");
        output.push_str(&json_string(self.severity.as_str()));

        let mut sorted: Vec<&(String, String)> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, value) in sorted {
            output.push(',');
            output.push_str(&json_string(key));
            output.push(':');
            output.push_str(&json_string(value));
        }

        output.push_str("}\n");
        output
    }

    /// Writes the line to stdout, or stderr for Warn and Error
    pub fn emit(self) {
        if self.severity.uses_stderr() {
            self.write_to(&mut io::stderr());
        } else {
            self.write_to(&mut io::stdout());
        }
    }

    /// Write errors are ignored; logging never fails a query
    fn write_to<W: Write>(&self, writer: &mut W) {
        let _ = writer.write_all(self.render().as_bytes());
        let _ = writer.flush();
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
