//! Data models module
//!
//! Defines the release lookup query and the release record returned by GitHub.

pub mod query;
pub mod release;

pub use query::{ReleaseQuery, RepoSlug};
pub use release::{FetchOutcome, ReleaseRecord};
