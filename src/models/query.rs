use std::fmt;
use std::str::FromStr;

use crate::error::ChangelogError;

/// A GitHub repository in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ChangelogError::Usage(format!(
                "invalid repository '{}', expected owner/name",
                s
            ))
        };

        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Which release of a repository to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub repo: RepoSlug,
    /// Requested tag; `None` means the latest release
    pub tag: Option<String>,
}

impl ReleaseQuery {
    /// An empty tag is treated as no tag, i.e. the latest release
    pub fn new(repo: RepoSlug, tag: Option<String>) -> Self {
        let tag = tag.filter(|tag| !tag.is_empty());
        Self { repo, tag }
    }

    /// Tag for user-facing messages, `latest` when none was requested
    pub fn tag_label(&self) -> &str {
        self.tag.as_deref().unwrap_or("latest")
    }
}
