use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use reciter_types::WordLevel;
use serde::{Deserialize, Serialize};

pub use self::format::ListFormat;
pub use self::lists::ListSource;

pub mod format;
pub mod lists;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReciterConfig {
    pub format: ListFormat,
    /// Word lists to load, in order
    pub lists: Vec<ListSource>,
}

impl ReciterConfig {
    /// Defaults overridden by the environment (and a `.env` file if present)
    pub fn new() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Load config from a JSON file, missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply `RECITER_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(delimiter) = lookup("RECITER_DELIMITER").and_then(|v| v.chars().next()) {
            self.format.delimiter = delimiter;
        }

        if let Some(prefix) = lookup("RECITER_COMMENT_PREFIX") {
            self.format.comment_prefix = prefix.trim().to_string();
        }

        if let Some(normalize) = lookup("RECITER_NORMALIZE").and_then(|v| v.trim().parse().ok()) {
            self.format.normalize = normalize;
        }

        for (key, level) in [
            ("RECITER_CET4_LIST", WordLevel::Cet4),
            ("RECITER_CET6_LIST", WordLevel::Cet6),
        ] {
            if let Some(path) = lookup(key).filter(|p| !p.trim().is_empty()) {
                self.lists.push(ListSource::new(path, level));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReciterConfig::default();
        assert_eq!(config.format.delimiter, '|');
        assert_eq!(config.format.comment_prefix, "#");
        assert!(config.lists.is_empty());
    }

    #[test]
    fn test_apply_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RECITER_DELIMITER", "\t"),
            ("RECITER_COMMENT_PREFIX", ""),
            ("RECITER_CET4_LIST", "lists/cet4.txt"),
            ("RECITER_CET6_LIST", "lists/cet6.txt"),
        ]);

        let mut config = ReciterConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.format.delimiter, '\t');
        assert!(!config.format.is_comment("# not a comment anymore"));
        assert_eq!(
            config.lists,
            vec![
                ListSource::new("lists/cet4.txt", WordLevel::Cet4),
                ListSource::new("lists/cet6.txt", WordLevel::Cet6),
            ]
        );
    }

    #[test]
    fn test_apply_env_trims_comment_prefix() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("RECITER_COMMENT_PREFIX", " ; "), ("RECITER_NORMALIZE", "true")]);

        let mut config = ReciterConfig::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.format.comment_prefix, ";");
        assert!(config.format.is_comment("; header"));
        assert!(config.format.normalize);
    }

    #[test]
    fn test_apply_env_ignores_empty_delimiter() {
        let mut config = ReciterConfig::default();
        config.apply_env(|key| (key == "RECITER_DELIMITER").then(String::new));
        assert_eq!(config.format.delimiter, '|');
    }

    #[test]
    fn test_load_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lists": [ {{ "path": "cet6.txt", "level": "cet-6" }} ] }}"#
        )
        .unwrap();

        let config = ReciterConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.format, ListFormat::default());
        assert_eq!(config.lists.len(), 1);
        assert_eq!(config.lists[0].path, PathBuf::from("cet6.txt"));
        assert_eq!(config.lists[0].level, WordLevel::Cet6);
    }

    #[test]
    fn test_load_from_file_rejects_unknown_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lists": [ {{ "path": "x.txt", "level": "N5" }} ] }}"#).unwrap();

        assert!(ReciterConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ReciterConfig::load_from_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open config file"));
    }
}
