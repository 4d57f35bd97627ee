use serde::{Deserialize, Serialize};

/// Default GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable holding the GitHub token
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_OAUTH_TOKEN";

/// gh-changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the GitHub REST API (override for GitHub Enterprise)
    pub api_base: String,

    /// Name of the environment variable the token is read from
    pub token_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}
