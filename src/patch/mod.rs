//! Patching a single markdown document for publication.
//!
//! A document without front matter gets:
//!
//! - a front matter block derived from its location and first-level heading,
//!   then overridden by the [`PublishConfig`] tables
//! - `{: .no_toc }` under the heading used as its title
//! - the `[TOC]` marker rewritten into the site generator's TOC directive
//! - callouts restyled (see [`callout`])
//!
//! Documents that already start with front matter are left untouched, so
//! running twice over the same tree is a no-op.

pub mod callout;
pub mod front_matter;

pub use front_matter::FrontMatter;

use crate::config::PublishConfig;
use crate::error::PublishError;
use callout::restyle_callouts;
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

/// Relative directory of documents placed directly in the base directory.
pub const TOP_LEVEL: &str = ".";

/// Prefix of a first-level heading line.
const HEADING_PREFIX: &str = "# ";
/// Line the authors put where a table of contents belongs.
const TOC_MARKER: &str = "[TOC]";
/// Replacement for [`TOC_MARKER`]: an ordered list the site generator fills in.
const TOC_DIRECTIVE: &str = "1. TOC\n{:toc}";
/// Keeps the title heading out of the generated table of contents.
const NO_TOC: &str = "{: .no_toc }";

/// One markdown document inside the tree being published.
#[derive(Debug, Clone)]
pub struct DocFile<'a> {
    pub base: &'a Path,
    /// Directory relative to `base`, `/`-separated; [`TOP_LEVEL`] for the base itself.
    pub relpath: String,
    pub filename: &'a str,
}

impl<'a> DocFile<'a> {
    pub fn new(base: &'a Path, relpath: impl Into<String>, filename: &'a str) -> Self {
        Self {
            base,
            relpath: relpath.into(),
            filename,
        }
    }

    pub fn full_path(&self) -> PathBuf {
        let dir = if is_top_level(&self.relpath) {
            self.base.to_path_buf()
        } else {
            self.base.join(&self.relpath)
        };
        dir.join(self.filename)
    }

    /// Path relative to the base, for logs.
    pub fn display_path(&self) -> String {
        if is_top_level(&self.relpath) {
            self.filename.to_owned()
        } else {
            format!("{}/{}", self.relpath, self.filename)
        }
    }
}

/// What happened to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Patched,
    /// Already had front matter.
    Skipped,
}

/// Patch `doc` in place.
pub fn patch_file(doc: &DocFile<'_>, config: &PublishConfig) -> Result<Outcome, PublishError> {
    let path = doc.full_path();
    let content = fs::read_to_string(&path).map_err(|err| PublishError::Read(path.clone(), err))?;

    let Some(patched) = patch_content(&content, &doc.relpath, doc.filename, config) else {
        return Ok(Outcome::Skipped);
    };

    fs::write(&path, patched).map_err(|err| PublishError::Write(path, err))?;
    Ok(Outcome::Patched)
}

/// Compute the published text of a document.
///
/// Returns `None` when `content` already starts with front matter.
pub fn patch_content(
    content: &str,
    relpath: &str,
    filename: &str,
    config: &PublishConfig,
) -> Option<String> {
    if FrontMatter::is_present(content) {
        return None;
    }

    let stem = file_stem(filename);
    let mut front_matter = FrontMatter {
        layout: config.layout.clone(),
        permalink: stem.to_owned(),
        parent: None,
        title: stem.to_owned(),
        nav_order: None,
    };

    if !is_top_level(relpath) {
        front_matter.parent = Some(relpath.to_owned());
        front_matter.permalink = format!("{relpath}/{stem}");
    }

    let mut lines: Vec<Cow<'_, str>> = content.lines().map(Cow::Borrowed).collect();
    let (title_index, toc_index) = scan_markers(&lines);

    // The directive stays a single entry so `title_index` remains valid.
    if let Some(index) = toc_index {
        lines[index] = Cow::Borrowed(TOC_DIRECTIVE);
    }

    if let Some(index) = title_index {
        let heading = &lines[index][HEADING_PREFIX.len()..];
        front_matter.title = format!("\"{heading}\"");
        lines.insert(index + 1, Cow::Borrowed(NO_TOC));
    }

    apply_overrides(&mut front_matter, relpath, filename, config);

    let body = lines.join("\n");
    Some(format!("{front_matter}{}", restyle_callouts(body)))
}

/// Find the title heading and the TOC marker in one pass.
///
/// The title is the most recent `# ` line seen and the TOC is the first
/// `[TOC]` line; scanning stops as soon as both have been seen, so a heading
/// after that point is never picked.
fn scan_markers<S: AsRef<str>>(lines: &[S]) -> (Option<usize>, Option<usize>) {
    let mut title_index = None;
    let mut toc_index = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.starts_with(HEADING_PREFIX) {
            title_index = Some(index);
        }
        if toc_index.is_none() && line == TOC_MARKER {
            toc_index = Some(index);
        }
        if title_index.is_some() && toc_index.is_some() {
            break;
        }
    }

    (title_index, toc_index)
}

fn apply_overrides(
    front_matter: &mut FrontMatter,
    relpath: &str,
    filename: &str,
    config: &PublishConfig,
) {
    if let Some(title) = config.titles.get(filename) {
        front_matter.title.clone_from(title);
    }
    if let Some(permalink) = config.permalinks.get(filename) {
        front_matter.permalink.clone_from(permalink);
    }
    if let Some(&order) = config.nav_order.get(filename) {
        front_matter.nav_order = Some(order);
    }
    if let Some(section) = config.sections.get(relpath) {
        front_matter.parent = Some(section.clone());
    }
}

fn is_top_level(relpath: &str) -> bool {
    relpath.is_empty() || relpath == TOP_LEVEL
}

/// Filename without its final extension.
fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}
