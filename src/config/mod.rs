//! Publishing configuration: the lookup tables that override derived metadata.
//!
//! # Tables
//!
//! | Key             | Keyed by           | Overrides            |
//! |-----------------|--------------------|----------------------|
//! | `layout`        | -                  | `layout` of every page |
//! | `[titles]`      | filename           | `title`              |
//! | `[permalinks]`  | filename           | `permalink`          |
//! | `[nav_order]`   | filename           | adds `nav_order`     |
//! | `[sections]`    | relative directory | `parent`             |
//!
//! Every table is optional; a missing table keeps its built-in default, a
//! present one replaces it wholesale.
//!
//! # Example
//!
//! ```toml
//! [titles]
//! "index.md" = "Home"
//!
//! [permalinks]
//! "index.md" = "/"
//!
//! [nav_order]
//! "index.md" = 1
//!
//! [sections]
//! "Dialects" = "Dialect Definitions"
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// Root configuration structure.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PublishConfig {
    /// Layout emitted for every page.
    #[serde(default = "defaults::layout")]
    #[educe(Default = defaults::layout())]
    pub layout: String,

    #[serde(default = "defaults::titles")]
    #[educe(Default = defaults::titles())]
    pub titles: HashMap<String, String>,

    #[serde(default = "defaults::permalinks")]
    #[educe(Default = defaults::permalinks())]
    pub permalinks: HashMap<String, String>,

    #[serde(default = "defaults::nav_order")]
    #[educe(Default = defaults::nav_order())]
    pub nav_order: HashMap<String, u32>,

    /// Section titles, keyed by the directory path relative to the base.
    #[serde(default = "defaults::sections")]
    #[educe(Default = defaults::sections())]
    pub sections: HashMap<String, String>,
}

impl PublishConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: PublishConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        toml::from_str(&content).map_err(|err| ConfigError::ParseFile(path.to_path_buf(), err))
    }

    /// Reject values the site generator would misrender.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.trim().is_empty() {
            return Err(ConfigError::Invalid("`layout` must not be empty".into()));
        }

        let mut zeroes: Vec<&str> = self
            .nav_order
            .iter()
            .filter(|&(_, &order)| order == 0)
            .map(|(name, _)| name.as_str())
            .collect();
        if !zeroes.is_empty() {
            zeroes.sort_unstable();
            return Err(ConfigError::Invalid(format!(
                "[nav_order] entries must be positive: {}",
                zeroes.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_tables() {
        let config = PublishConfig::default();

        assert_eq!(config.layout, "default");
        assert_eq!(config.titles.len(), 12);
        assert_eq!(config.permalinks.len(), 14);
        assert_eq!(config.nav_order.len(), 14);
        assert_eq!(config.titles["index.md"], "Home");
        assert_eq!(config.permalinks["index.md"], "/");
        assert_eq!(config.nav_order["getting_started_python.md"], 7);
        assert_eq!(config.sections["Dialects"], "Dialect Definitions");
        assert_eq!(config.sections["GetStarted"], "Getting Started");
    }

    #[test]
    fn test_empty_config_matches_default() {
        let config = PublishConfig::from_str("").unwrap();
        let default = PublishConfig::default();

        assert_eq!(config.layout, default.layout);
        assert_eq!(config.titles, default.titles);
        assert_eq!(config.permalinks, default.permalinks);
        assert_eq!(config.nav_order, default.nav_order);
        assert_eq!(config.sections, default.sections);
    }

    #[test]
    fn test_present_table_replaces_default() {
        let config = r#"
            [titles]
            "guide.md" = "The Guide"

            [nav_order]
            "guide.md" = 2
        "#;
        let config = PublishConfig::from_str(config).unwrap();

        assert_eq!(config.titles.len(), 1);
        assert_eq!(config.titles["guide.md"], "The Guide");
        assert!(!config.titles.contains_key("index.md"));
        assert_eq!(config.nav_order.len(), 1);
        // untouched tables keep their defaults
        assert_eq!(config.permalinks["index.md"], "/");
        assert_eq!(config.sections.len(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PublishConfig::from_str("colour = \"blue\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_zero_nav_order() {
        let config = PublishConfig::from_str(
            r#"
            [nav_order]
            "b.md" = 0
            "a.md" = 0
            "c.md" = 3
        "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("a.md, b.md"));
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        let config = PublishConfig::from_str("layout = \"  \"").unwrap();
        assert!(config.validate().is_err());
        assert!(PublishConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docmatter.toml");
        fs::write(&path, "layout = \"page\"\n").unwrap();

        let config = PublishConfig::from_path(&path).unwrap();
        assert_eq!(config.layout, "page");

        fs::write(&path, "[nav_order]\n\"a.md\" = \"first\"\n").unwrap();
        let malformed = PublishConfig::from_path(&path);
        assert!(matches!(malformed, Err(ConfigError::ParseFile(ref p, _)) if p == &path));

        let missing = PublishConfig::from_path(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Read(..))));
    }
}
