//! The diagnostic sink
//!
//! Validation and emission failures are not returned to the caller as hard
//! errors; they are reported here with a severity and an optional
//! source-location anchor (the qualified name of the offending class), then
//! shipped back inside the response envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A failure; the affected class produces no artifact
    Error,
    /// Informational output
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Note => write!(f, "NOTE"),
        }
    }
}

/// One human-readable message reported during a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Message severity
    pub severity: Severity,
    /// Human-readable message text
    pub message: String,
    /// Qualified name of the offending class, when one is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "[{}] {}: {}", self.severity, location, self.message),
            None => write!(f, "[{}] {}", self.severity, self.message),
        }
    }
}

/// Collecting sink for diagnostics reported during one pass
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error anchored to a class
    pub fn error(&mut self, location: Option<&str>, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            location: location.map(str::to_string),
        });
    }

    /// Report an informational message
    pub fn note(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic {
            severity: Severity::Note,
            message: message.into(),
            location: None,
        });
    }

    /// Whether any error-severity diagnostic has been reported
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    /// The diagnostics reported so far
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Consume the sink, yielding the reported diagnostics
    pub fn into_items(self) -> Vec<Diagnostic> {
        self.items
    }
}
