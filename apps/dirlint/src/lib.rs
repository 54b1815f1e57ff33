//! dirlint core library.
//!
//! This crate exposes programmatic APIs for checking a directory tree
//! against a declarative structural policy (required/forbidden directories
//! and files, per-directory extension allow-lists, expected subdirectory
//! ordering).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery, effective configuration resolution, rule loading.
//! - `check`: The rule-evaluation engine producing ordered issues.
//! - `tree`: Read-only directory-tree accessors (`FsNode`, `MemNode`).
//! - `models`: Data models for the rule and check output structs.
//! - `output`: Human/JSON printers for check results.
//! - `utils`: Supporting helpers.
pub mod check;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod tree;
pub mod utils;
