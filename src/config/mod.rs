//! Configuration module
//!
//! Loads the optional gh-changelog TOML configuration and resolves the
//! GitHub token from the environment.

mod types;

pub use types::Config;

use crate::error::{ChangelogError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file, or the defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        ChangelogError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Read the API token from the named environment variable.
///
/// An empty value counts as unset.
pub fn token_from_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|token| !token.is_empty())
}
