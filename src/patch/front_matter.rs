//! Front matter record and its serialized block.

use std::fmt;

/// Line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// Metadata header consumed by the site generator.
///
/// Fields render in declaration order; the optional ones are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub layout: String,
    pub permalink: String,
    pub parent: Option<String>,
    /// Already quoted when taken from a heading.
    pub title: String,
    pub nav_order: Option<u32>,
}

impl FrontMatter {
    /// Whether `content` already starts with a front matter block.
    ///
    /// The opening delimiter may end in either `\n` or `\r\n`.
    pub fn is_present(content: &str) -> bool {
        content
            .strip_prefix(DELIMITER)
            .is_some_and(|rest| rest.starts_with('\n') || rest.starts_with("\r\n"))
    }

    /// `(key, value)` pairs in output order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("layout", self.layout.clone()),
            ("permalink", self.permalink.clone()),
        ];
        if let Some(parent) = &self.parent {
            fields.push(("parent", parent.clone()));
        }
        fields.push(("title", self.title.clone()));
        if let Some(order) = self.nav_order {
            fields.push(("nav_order", order.to_string()));
        }
        fields
    }
}

/// Renders the delimited block followed by one blank line.
impl fmt::Display for FrontMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DELIMITER}")?;
        for (key, value) in self.fields() {
            writeln!(f, "{key}: {value}")?;
        }
        writeln!(f, "{DELIMITER}")?;
        writeln!(f)
    }
}
