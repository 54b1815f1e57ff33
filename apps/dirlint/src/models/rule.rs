//! Rule schema: the declarative directory-structure policy.
//!
//! All six fields are independently optional; an absent or empty field
//! imposes no constraint. Relative directory paths are `/`-separated and
//! resolved from the checked root one named subdirectory at a time; the
//! empty string addresses the root itself.
//!
//! The path-keyed maps use `BTreeMap` so that identical rule files always
//! produce identical issue sequences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
/// Root policy loaded from a TOML or YAML rule file.
pub struct Rule {
    /// Directory names that must exist as direct children of the root.
    #[serde(default)]
    pub required_directories: Vec<String>,
    /// Directory names that must not exist as direct children of the root.
    #[serde(default)]
    pub forbidden_directories: Vec<String>,
    /// Relative directory path -> filenames that must exist there.
    #[serde(default)]
    pub required_files: BTreeMap<String, Vec<String>>,
    /// Relative directory path -> filenames that must not exist there.
    #[serde(default)]
    pub forbidden_files: BTreeMap<String, Vec<String>>,
    /// Relative directory path -> allowed extensions (lowercase, no dot).
    /// An empty list means no restriction for that directory.
    #[serde(default)]
    pub file_extensions: BTreeMap<String, Vec<String>>,
    /// Expected relative ordering of names among the root's subdirectories.
    #[serde(default)]
    pub directory_order: Vec<String>,
}

impl Rule {
    /// True when no field imposes any constraint.
    pub fn is_empty(&self) -> bool {
        self.required_directories.is_empty()
            && self.forbidden_directories.is_empty()
            && self.required_files.is_empty()
            && self.forbidden_files.is_empty()
            && self.file_extensions.is_empty()
            && self.directory_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let rule: Rule = toml::from_str("").unwrap();
        assert!(rule.is_empty());
    }

    #[test]
    fn test_full_rule_from_toml() {
        let rule: Rule = toml::from_str(
            r#"
required_directories = ["src", "tests"]
forbidden_directories = ["build"]
directory_order = ["src", "tests", "docs"]

[required_files]
"" = ["README.md"]
"src" = ["main.rs"]

[forbidden_files]
"src" = ["mod.rs"]

[file_extensions]
"docs" = ["md", "txt"]
            "#,
        )
        .unwrap();
        assert_eq!(rule.required_directories, vec!["src", "tests"]);
        assert_eq!(rule.forbidden_directories, vec!["build"]);
        assert_eq!(rule.required_files.get(""), Some(&vec!["README.md".to_string()]));
        assert_eq!(rule.required_files.get("src"), Some(&vec!["main.rs".to_string()]));
        assert_eq!(rule.forbidden_files.get("src"), Some(&vec!["mod.rs".to_string()]));
        assert_eq!(
            rule.file_extensions.get("docs"),
            Some(&vec!["md".to_string(), "txt".to_string()])
        );
        assert_eq!(rule.directory_order, vec!["src", "tests", "docs"]);
    }

    #[test]
    fn test_rule_roundtrips_through_serialization() {
        let mut rule = Rule::default();
        rule.required_directories.push("src".into());
        rule.file_extensions.insert("docs".into(), vec!["md".into()]);
        let s = toml::to_string(&rule).unwrap();
        let back: Rule = toml::from_str(&s).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let res: Result<Rule, _> = toml::from_str("required_dirs = [\"src\"]\n");
        assert!(res.is_err());
    }
}
