//! Errors from loading the publishing tables.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read publishing tables from `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    /// TOML that did not come from a file.
    #[error("malformed publishing tables")]
    Parse(#[from] toml::de::Error),

    #[error("malformed publishing tables in `{0}`")]
    ParseFile(PathBuf, #[source] toml::de::Error),

    #[error("invalid publishing tables: {0}")]
    Invalid(String),
}
