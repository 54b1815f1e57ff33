//! Structure check: evaluates a `Rule` against a directory tree.
//!
//! `evaluate` runs six sequential passes over the rule's fields, each
//! appending zero or more issues to one output list. No pass short-circuits
//! another, and the list is never re-sorted: output order is evaluation
//! order (required dirs, forbidden dirs, required files, forbidden files,
//! extensions, ordering).
//!
//! Unresolved relative paths are an Error for required files but vacuously
//! satisfied for forbidden files and extension checks; forbidding content in
//! a directory that does not exist has nothing to flag.

use crate::models::rule::Rule;
use crate::models::{CheckResult, Issue, Severity, Summary};
use crate::tree::DirNode;

/// Evaluate `rule` against `root`, producing issues in evaluation order.
///
/// Pure: no state between calls, the tree is never mutated, identical inputs
/// yield identical output. `root` must be a directory node; the CLI rejects
/// anything else before this is reached.
pub fn evaluate<N: DirNode>(root: &N, rule: &Rule) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    for name in &rule.required_directories {
        if !has_subdirectory(root, name) {
            issues.push(Issue::new(
                root.path(),
                format!("missing required directory: {name}"),
                Severity::Error,
            ));
        }
    }

    for name in &rule.forbidden_directories {
        if has_subdirectory(root, name) {
            issues.push(Issue::new(
                root.path(),
                format!("forbidden directory present: {name}"),
                Severity::Error,
            ));
        }
    }

    for (dir_path, files) in &rule.required_files {
        match resolve_directory(root, dir_path) {
            Some(dir) => {
                for file in files {
                    if !has_file(&dir, file) {
                        issues.push(Issue::new(
                            dir.path(),
                            format!("missing required file: {file}"),
                            Severity::Error,
                        ));
                    }
                }
            }
            None => {
                issues.push(Issue::new(
                    root.path(),
                    format!("directory not found: {dir_path}"),
                    Severity::Error,
                ));
            }
        }
    }

    for (dir_path, files) in &rule.forbidden_files {
        // A directory that does not exist cannot hold forbidden files.
        if let Some(dir) = resolve_directory(root, dir_path) {
            for file in files {
                if has_file(&dir, file) {
                    issues.push(Issue::new(
                        dir.path(),
                        format!("forbidden file present: {file}"),
                        Severity::Error,
                    ));
                }
            }
        }
    }

    for (dir_path, extensions) in &rule.file_extensions {
        if extensions.is_empty() {
            continue;
        }
        if let Some(dir) = resolve_directory(root, dir_path) {
            for child in dir.children() {
                if child.is_directory() {
                    continue;
                }
                let ext = child.extension();
                if !extensions.contains(&ext) {
                    issues.push(Issue::new(
                        child.path(),
                        format!("disallowed file extension: .{ext}"),
                        Severity::Warning,
                    ));
                }
            }
        }
    }

    if !rule.directory_order.is_empty() {
        check_directory_order(root, &rule.directory_order, &mut issues);
    }

    issues
}

/// Evaluate and tally: what the CLI consumes.
pub fn run_check<N: DirNode>(root: &N, rule: &Rule) -> CheckResult {
    let issues = evaluate(root, rule);
    let summary = Summary::from_issues(&issues);
    CheckResult { issues, summary }
}

/// Single left-to-right monotonicity scan over the expected ordering.
///
/// Tracks the running maximum of actual indices among expected names that
/// exist; a later expected name whose actual index regresses below that
/// maximum is flagged. Expected names absent from the tree are ignored (this
/// pass does not require them to exist), and no contiguity or full
/// permutation check is attempted.
fn check_directory_order<N: DirNode>(root: &N, expected: &[String], issues: &mut Vec<Issue>) {
    let actual_order: Vec<String> = root
        .children()
        .into_iter()
        .filter(|c| c.is_directory())
        .map(|c| c.name().to_string())
        .collect();

    let mut last_seen: Option<(usize, &str)> = None;
    for name in expected {
        let Some(index) = actual_order.iter().position(|n| n == name) else {
            continue;
        };
        match last_seen {
            Some((last_index, prev)) if index < last_index => {
                issues.push(Issue::new(
                    root.path(),
                    format!("directory order violation: {name} should come after {prev}"),
                    Severity::Warning,
                ));
            }
            _ => last_seen = Some((index, name.as_str())),
        }
    }
}

/// Descend `/`-separated segments from `root`; empty segments are skipped,
/// so the empty path resolves to the root itself. Any segment that is not an
/// existing subdirectory makes the whole path unresolved.
fn resolve_directory<N: DirNode>(root: &N, path: &str) -> Option<N> {
    let mut current = root.clone();
    for part in path.split('/') {
        if part.is_empty() {
            continue;
        }
        let child = current.find_child(part)?;
        if !child.is_directory() {
            return None;
        }
        current = child;
    }
    Some(current)
}

fn has_subdirectory<N: DirNode>(dir: &N, name: &str) -> bool {
    dir.find_child(name).is_some_and(|c| c.is_directory())
}

fn has_file<N: DirNode>(dir: &N, name: &str) -> bool {
    dir.find_child(name).is_some_and(|c| !c.is_directory())
}
