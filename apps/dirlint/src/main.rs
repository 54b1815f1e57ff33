//! dirlint CLI binary entry point.
//! Delegates to the library for checking and prints results.

use clap::Parser;
use dirlint::cli::{Cli, Commands};
use dirlint::tree::{DirNode, FsNode};
use dirlint::{check, config, output, utils};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check { root, rule, output } => {
            let eff =
                config::resolve_effective(root.as_deref(), rule.as_deref(), output.as_deref());
            // Require a rule to be configured (no default)
            if !eff.rule_configured {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "Rule file is not configured. Pass --rule or add dirlint.toml."
                );
                std::process::exit(2);
            }
            // Friendly note if no dirlint config was found
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No dirlint.toml found; using defaults."
                );
            }
            // Rule paths from the CLI are tried relative to the current
            // directory first; config-sourced paths live under the root.
            let rule_path = {
                let p = PathBuf::from(&eff.rule);
                if p.is_absolute() || p.exists() {
                    p
                } else {
                    eff.repo_root.join(&eff.rule)
                }
            };
            let rule = match config::load_rule(&rule_path) {
                Ok(r) => r,
                Err(msg) => {
                    eprintln!("{} {}", utils::error_prefix(), msg);
                    std::process::exit(2);
                }
            };
            let root_node = match FsNode::open(&eff.repo_root) {
                Some(n) => n,
                None => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!(
                            "Root directory not found: {}",
                            eff.repo_root.to_string_lossy()
                        )
                    );
                    std::process::exit(2);
                }
            };
            if !root_node.is_directory() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Root path is not a directory: {}",
                        eff.repo_root.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            let result = check::run_check(&root_node, &rule);
            output::print_check(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
    }
}
