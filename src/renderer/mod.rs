//! Changelog entry renderer
//!
//! Turns a GitHub release into one RPM-style changelog entry:
//!
//! ```text
//! -------------------------------------------------------------------
//! Mon Jan  1 00:00:00 2024 UTC - Jane Doe <jane@example.com>
//!
//! - Release v1.2.0 - Big Release
//!
//!   Fixed bug
//!
//! ```

use crate::models::ReleaseRecord;

/// Width of the separator line opening each entry
pub const HEADER_WIDTH: usize = 67;

/// Indentation applied to the release body
const BODY_INDENT: &str = "  ";

/// A single RPM changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub header: String,
    pub date_line: String,
    pub title_line: String,
    /// Indented release notes, `None` when the release has no body
    pub body_block: Option<String>,
}

impl ChangelogEntry {
    /// Render the entry as text, ending with a blank line
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header);
        output.push('\n');

        output.push_str(&self.date_line);
        output.push_str("\n\n");

        output.push_str(&self.title_line);
        output.push_str("\n\n");

        if let Some(body) = &self.body_block {
            output.push_str(body);
            output.push_str("\n\n");
        }

        output
    }
}

/// Build the changelog entry for `record`.
///
/// `tag` is the tag the user asked for; in latest mode it is `None` and the
/// record's own `tag_name` is used instead.
pub fn format(record: &ReleaseRecord, tag: Option<&str>, author: Option<&str>) -> ChangelogEntry {
    let tag = tag.unwrap_or(record.tag_name.as_str());

    let mut date_line = record.published_at.format("%c %Z").to_string();
    if let Some(author) = author {
        date_line.push_str(&format!(" - {}", author));
    }

    let mut title_line = format!("- Release {}", tag);
    if let Some(name) = record.name.as_deref() {
        if !name.is_empty() && name != tag {
            title_line.push_str(&format!(" - {}", name));
        }
    }

    let body_block = record
        .body
        .as_deref()
        .filter(|body| !body.is_empty())
        .map(|body| indent(body, BODY_INDENT));

    ChangelogEntry {
        header: "-".repeat(HEADER_WIDTH),
        date_line,
        title_line,
        body_block,
    }
}

/// Prefix every non-blank line of `text`.
///
/// `\r\n` and lone `\r` line endings are normalized to `\n`.
fn indent(text: &str, prefix: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}
