//! Output rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. Human output prints one
//! tab-separated line per issue, `{severity}\t{path}\t{message}`, in
//! evaluation order, then a summary line. The JSON form serializes the
//! `CheckResult` directly.

use crate::models::{CheckResult, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_label(severity: Severity, color: bool) -> String {
    if !color {
        return severity.to_string();
    }
    match severity {
        Severity::Error => "error".red().bold().to_string(),
        Severity::Warning => "warning".yellow().bold().to_string(),
        Severity::Info => "info".blue().bold().to_string(),
    }
}

/// Print check results in the requested format.
pub fn print_check(res: &CheckResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for is in &res.issues {
                println!(
                    "{}\t{}\t{}",
                    severity_label(is.severity, color),
                    is.path,
                    is.message
                );
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={}",
                res.summary.errors, res.summary.warnings, res.summary.infos
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult) -> JsonVal {
    // Directly serialize CheckResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
