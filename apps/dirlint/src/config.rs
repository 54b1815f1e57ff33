//! Configuration discovery and effective settings resolution.
//!
//! dirlint reads `dirlint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `rule`: none (must come from CLI or config)
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.
//!
//! Rule files themselves are TOML, or YAML when the file name ends in
//! `.yaml|.yml`, deserialized directly into `Rule`.

use crate::models::rule::Rule;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `dirlint.toml|yaml`.
pub struct DirlintConfig {
    /// Path to the rule file, relative to the repository root.
    pub rule: Option<String>,
    /// Output mode: human|json.
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub rule: String,
    pub rule_configured: bool,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `dirlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("dirlint.toml").exists()
            || cur.join("dirlint.yaml").exists()
            || cur.join("dirlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DirlintConfig` from `dirlint.toml` or `dirlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DirlintConfig> {
    let toml_path = root.join("dirlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: DirlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["dirlint.yaml", "dirlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: DirlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_rule: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let repo_root = if cli_root.is_some() {
        // An explicit root is taken as-is; discovery only applies to the cwd.
        start
    } else {
        detect_repo_root(&start)
    };
    let cfg = load_config(&repo_root).unwrap_or_default();

    let (rule, rule_configured) = match cli_rule.map(|s| s.to_string()).or(cfg.rule) {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        rule,
        rule_configured,
        output,
    }
}

/// Load a rule file into a `Rule`, with a plain diagnostic on failure.
///
/// TOML by default; YAML when the extension is `.yaml|.yml`.
pub fn load_rule(path: &Path) -> Result<Rule, String> {
    let s = fs::read_to_string(path)
        .map_err(|e| format!("cannot read rule file {}: {}", path.to_string_lossy(), e))?;
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if yaml {
        serde_yaml::from_str(&s)
            .map_err(|e| format!("rule file {} is not valid YAML: {}", path.to_string_lossy(), e))
    } else {
        toml::from_str(&s)
            .map_err(|e| format!("rule file {} is not valid TOML: {}", path.to_string_lossy(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("dirlint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
rule = "conventions/structure.toml"
output = "json"
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.rule, "conventions/structure.toml");
        assert!(eff.rule_configured);
        assert_eq!(eff.output, "json");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("dirlint.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
rule: structure.yaml
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.rule, "structure.yaml");
        // output defaults to human when unspecified
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("dirlint.toml")).unwrap();
        writeln!(f, "rule = \"from-config.toml\"\noutput = \"json\"").unwrap();

        let eff = resolve_effective(root.to_str(), Some("from-cli.toml"), Some("human"));
        assert_eq!(eff.rule, "from-cli.toml");
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_unconfigured_rule() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None);
        assert!(!eff.rule_configured);
        assert_eq!(eff.rule, "");
    }

    #[test]
    fn test_load_rule_toml_and_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("structure.toml"),
            "required_directories = [\"src\"]\n",
        )
        .unwrap();
        fs::write(
            root.join("structure.yaml"),
            "required_directories:\n  - src\n",
        )
        .unwrap();

        let from_toml = load_rule(&root.join("structure.toml")).unwrap();
        let from_yaml = load_rule(&root.join("structure.yaml")).unwrap();
        assert_eq!(from_toml, from_yaml);
        assert_eq!(from_toml.required_directories, vec!["src"]);
    }

    #[test]
    fn test_load_rule_errors_are_messages() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let missing = load_rule(&root.join("absent.toml")).unwrap_err();
        assert!(missing.contains("cannot read rule file"));

        fs::write(root.join("bad.toml"), "required_directories = {").unwrap();
        let bad = load_rule(&root.join("bad.toml")).unwrap_err();
        assert!(bad.contains("not valid TOML"));
    }
}
