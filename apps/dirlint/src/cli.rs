//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dirlint",
    version,
    about = "Directory-structure lint (Rust + TOML)",
    long_about = "dirlint — a tiny, fast CLI to validate a project's directory tree against a declarative structural policy.\n\nConfiguration precedence: CLI > dirlint.toml > defaults.",
    after_help = "Examples:\n  dirlint check --rule conventions/structure.toml\n  dirlint check path/to/project --rule structure.toml --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current dirlint version."
    )]
    Version,
    /// Check a directory tree against a structure rule
    #[command(
        about = "Run the structure check",
        long_about = "Evaluate the rule file against the root directory. Exit code 0 when no error-severity issues are found, 1 when any error is present, 2 on usage or I/O failure.",
        after_help = "Examples:\n  dirlint check --rule structure.toml\n  dirlint check ../service --rule structure.yaml --output json"
    )]
    Check {
        #[arg(help = "Root directory to check (default: detected repository root)")]
        root: Option<String>,
        #[arg(long, help = "Path to the rule file, TOML or YAML (required)")]
        rule: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
