use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub release as returned by the REST API
///
/// Only the fields used for the changelog are decoded; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Git tag the release points at
    pub tag_name: String,
    /// Display name, often null or equal to the tag
    pub name: Option<String>,
    /// Publish timestamp
    pub published_at: DateTime<Utc>,
    /// Free-form release notes; a missing key decodes as `None`, same as null
    pub body: Option<String>,
}

/// Result of a release lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(ReleaseRecord),
    /// The release (or repository) does not exist
    NotFound,
}
