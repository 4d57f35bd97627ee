//! Changelog output
//!
//! Writes a rendered entry to stdout, or prepends it to a changelog file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;

/// Print the entry to `out`, followed by a newline
pub fn print_entry(out: &mut impl Write, entry: &str) -> Result<()> {
    writeln!(out, "{}", entry)?;
    out.flush()?;
    Ok(())
}

/// Prepend the entry to `path`.
///
/// A missing file is treated as empty. Nothing is inserted between the new
/// entry and the previous content.
pub fn prepend_to_file(path: &Path, entry: &str) -> Result<()> {
    let old = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::with_capacity(entry.len() + old.len());
    content.push_str(entry);
    content.push_str(&old);
    fs::write(path, content)?;

    tracing::info!(path = %path.display(), "changelog entry prepended");
    Ok(())
}
