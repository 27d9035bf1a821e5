//! Severity of issues reported while generating bean classes.

use serde::Serialize;
use std::fmt;

/// How an issue is surfaced to the host.
///
/// In strict mode every issue is an error and aborts the build; otherwise
/// the offending interface is skipped and the issue is a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    /// Severity used for every issue of a run.
    pub fn for_mode(strict: bool) -> Self {
        if strict {
            IssueSeverity::Error
        } else {
            IssueSeverity::Warning
        }
    }

    /// Get the severity name for display.
    pub fn name(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, IssueSeverity::Error)
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
