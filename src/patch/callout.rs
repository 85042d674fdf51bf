//! Restyling of block-quote callouts.
//!
//! Authors write callouts as
//!
//! ```text
//! > Tip:<br>
//! > &nbsp;&nbsp;&nbsp;&nbsp;Body text
//! ```
//!
//! which renders poorly on the site; they become a colored label instead:
//!
//! ```text
//! > Tip
//! > {: .label .label-green }
//! > Body text
//! ```

/// Indentation authors put on the line after a callout label.
const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// A callout label and the color of its rendered badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub label: &'static str,
    pub color: &'static str,
}

/// Callouts restyled in every published page.
pub const CALLOUTS: &[Callout] = &[
    Callout {
        label: "Tip",
        color: "green",
    },
    Callout {
        label: "Note",
        color: "blue",
    },
];

impl Callout {
    fn pattern(&self) -> String {
        format!("> {}:<br>\n> {INDENT}", self.label)
    }

    fn replacement(&self) -> String {
        format!("> {}\n> {{: .label .label-{} }}\n> ", self.label, self.color)
    }
}

/// Replace every known callout pattern in `content`.
pub fn restyle_callouts(content: String) -> String {
    CALLOUTS.iter().fold(content, |content, callout| {
        let pattern = callout.pattern();
        if content.contains(&pattern) {
            content.replace(&pattern, &callout.replacement())
        } else {
            content
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_callout() {
        let content = "> Tip:<br>\n> &nbsp;&nbsp;&nbsp;&nbsp;Use the release build.\n".to_string();
        assert_eq!(
            restyle_callouts(content),
            "> Tip\n> {: .label .label-green }\n> Use the release build.\n"
        );
    }

    #[test]
    fn test_note_callout_repeated() {
        let note = "> Note:<br>\n> &nbsp;&nbsp;&nbsp;&nbsp;x";
        let content = format!("{note}\n\ntext\n\n{note}");
        let expected = "> Note\n> {: .label .label-blue }\n> x";

        assert_eq!(
            restyle_callouts(content),
            format!("{expected}\n\ntext\n\n{expected}")
        );
    }

    #[test]
    fn test_incomplete_callout_untouched() {
        // label without the indented continuation line
        let content = "> Tip:<br>\n> Use the release build.".to_string();
        assert_eq!(restyle_callouts(content.clone()), content);

        let content = "> Warning:<br>\n> &nbsp;&nbsp;&nbsp;&nbsp;careful".to_string();
        assert_eq!(restyle_callouts(content.clone()), content);
    }
}
