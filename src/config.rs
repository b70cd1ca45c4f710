//! Tunables for scanning and ranking.
//!
//! Every field has a default, so a YAML document only needs to name the
//! values it overrides:
//!
//! ```
//! use mention_find::MentionConfig;
//!
//! let config = MentionConfig::from_yaml_str("rank:\n  visible_rows: 5\n")?;
//! assert_eq!(config.rank.visible_rows, 5);
//! assert_eq!(config.rank.limit, 20);
//! # Ok::<(), mention_find::ConfigError>(())
//! ```

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Limits applied when ranking candidates for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// Size of the ranked candidate pool
    pub limit: usize,
    /// Number of candidates returned, in input order, for an empty query
    pub empty_query_limit: usize,
    /// Rows a picker shows before collapsing the rest into "K more"
    pub visible_rows: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            limit: 20,
            empty_query_limit: 15,
            visible_rows: 8,
        }
    }
}

/// Limits applied while walking a directory for candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Levels below the root to list; the root's own entries are level 1
    pub max_depth: usize,
    pub max_items_per_directory: usize,
    pub max_total_items: usize,
    /// Include entries whose name starts with a dot
    pub include_hidden: bool,
    /// Entry names that are never listed nor descended into
    pub skip_directories: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_depth: 3,
            max_items_per_directory: 50,
            max_total_items: 1000,
            include_hidden: false,
            skip_directories: [
                "node_modules",
                "target",
                "dist",
                "build",
                "__pycache__",
                "venv",
                ".git",
                ".DS_Store",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ScanOptions {
    pub(crate) fn is_skipped(&self, name: &str) -> bool {
        self.skip_directories.iter().any(|s| s == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionConfig {
    pub scan: ScanOptions,
    pub rank: RankOptions,
}

impl MentionConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(MentionConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = MentionConfig::default();
        assert_eq!(config.rank.limit, 20);
        assert_eq!(config.rank.empty_query_limit, 15);
        assert_eq!(config.rank.visible_rows, 8);
        assert_eq!(config.scan.max_depth, 3);
        assert!(!config.scan.include_hidden);
        assert!(config.scan.is_skipped("node_modules"));
        assert!(!config.scan.is_skipped("src"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = MentionConfig::from_yaml_str(indoc! {r#"
            scan:
              max_depth: 5
              skip_directories: [vendor]
            rank:
              limit: 50
        "#})
        .unwrap();

        assert_eq!(config.scan.max_depth, 5);
        assert_eq!(config.scan.max_items_per_directory, 50);
        assert_eq!(config.scan.skip_directories, vec!["vendor".to_string()]);
        assert_eq!(config.rank.limit, 50);
        assert_eq!(config.rank.visible_rows, 8);
    }

    #[test]
    fn test_empty_yaml() {
        assert_eq!(
            MentionConfig::from_yaml_str("  \n").unwrap(),
            MentionConfig::default()
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let result = MentionConfig::from_yaml_str("rank:\n  limit: lots\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("mention.yaml")).unwrap();
        fs::write(&path, "scan:\n  include_hidden: true\n").unwrap();

        let config = MentionConfig::from_path(&path).unwrap();
        assert!(config.scan.include_hidden);

        let missing = MentionConfig::from_path(&path.with_file_name("missing.yaml"));
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }
}
