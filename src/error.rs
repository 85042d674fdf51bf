//! Errors raised while publishing a documentation tree.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("expected path to a directory: `{0}`")]
    NotADirectory(PathBuf),

    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to walk documentation tree")]
    Walk(#[from] walkdir::Error),
}
