//! Shared data models for check output and the rule schema.

pub mod rule;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a single finding. Display labels only; issue list order always
/// follows evaluation order, never severity.
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single structural finding with severity and location.
pub struct Issue {
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Issue {
            path: path.into(),
            message: message.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated severity counts used by printers and the exit-code decision.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl Summary {
    /// Tally severities over a finished issue list.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let mut infos = 0usize;
        for is in issues {
            match is.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
                Severity::Info => infos += 1,
            }
        }
        Summary {
            errors,
            warnings,
            infos,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Check results container: issues in evaluation order plus the summary.
pub struct CheckResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
