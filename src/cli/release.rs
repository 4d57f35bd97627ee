use serde::Serialize;
use std::io;
use std::path::PathBuf;

use crate::config;
use crate::error::{ChangelogError, Result};
use crate::github::ReleaseFetcher;
use crate::models::{FetchOutcome, ReleaseQuery, RepoSlug};
use crate::output;
use crate::renderer;

/// Fetch a release and write its changelog entry
pub fn run(
    repo: RepoSlug,
    tag: Option<String>,
    author: Option<String>,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = config::load(config_path.as_deref())?;

    // The token is resolved here and handed to the fetcher explicitly
    let token = config::token_from_env(&config.token_env);
    let fetcher = ReleaseFetcher::new(&config, token)?;

    let query = ReleaseQuery::new(repo, tag);
    let record = match fetcher.fetch(&query)? {
        FetchOutcome::Found(record) => record,
        FetchOutcome::NotFound => {
            println!(
                "Release {} not found in {}. Skipping changelog generation.",
                query.tag_label(),
                query.repo
            );
            return Ok(());
        }
    };

    let entry = renderer::format(&record, query.tag.as_deref(), author.as_deref()).render();

    match file {
        Some(path) => output::prepend_to_file(&path, &entry),
        None => output::print_entry(&mut io::stdout().lock(), &entry),
    }
}

/// Build the message printed to stderr for a failed run
pub fn error_report(err: &ChangelogError) -> String {
    match err {
        ChangelogError::Fetch { url, body, .. } => {
            format!("{}\nUrl: {}\nResponse:\n{}", err, url, pretty_body(body))
        }
        _ => format!("Error: {}", err),
    }
}

/// Pretty-print a JSON response body with 4-space indentation, or return it as-is
fn pretty_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    if value.serialize(&mut serializer).is_err() {
        return body.to_string();
    }

    String::from_utf8(buffer).unwrap_or_else(|_| body.to_string())
}
