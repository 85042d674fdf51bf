//! Directory traversal: find every markdown document under the base directory
//! and patch it.

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::log;
use crate::patch::{DocFile, Outcome, TOP_LEVEL, patch_file};
use std::path::Path;
use walkdir::WalkDir;

/// Case-sensitive suffix of documents to patch.
const MARKDOWN_SUFFIX: &str = ".md";

/// Counts from one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub patched: usize,
    pub skipped: usize,
}

/// Patch every `.md` file under `base`.
///
/// Stops at the first error; documents patched before it stay patched.
pub fn process_directory(base: &Path, config: &PublishConfig) -> Result<Report, PublishError> {
    if !base.is_dir() {
        return Err(PublishError::NotADirectory(base.to_path_buf()));
    }

    let mut report = Report::default();

    for entry in WalkDir::new(base).sort_by_file_name() {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(MARKDOWN_SUFFIX) {
            continue;
        }
        let Some(filename) = name.to_str() else {
            log!("error"; "skipping non UTF-8 name `{}`", entry.path().display());
            continue;
        };

        let Some(relpath) = relative_dir(base, entry.path()) else {
            log!("error"; "skipping non UTF-8 directory `{}`", entry.path().display());
            continue;
        };

        let doc = DocFile::new(base, relpath, filename);
        match patch_file(&doc, config)? {
            Outcome::Patched => {
                log!("patch"; "{}", doc.display_path());
                report.patched += 1;
            }
            Outcome::Skipped => {
                log!("skip"; "{}", doc.display_path());
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Directory containing `file`, relative to `base` and `/`-separated.
///
/// `None` when a component is not valid UTF-8.
fn relative_dir(base: &Path, file: &Path) -> Option<String> {
    let rel = file
        .parent()
        .and_then(|dir| dir.strip_prefix(base).ok())
        .unwrap_or(Path::new(""));

    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;

    Some(if parts.is_empty() {
        TOP_LEVEL.to_owned()
    } else {
        parts.join("/")
    })
}
