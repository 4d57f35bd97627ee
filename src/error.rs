use thiserror::Error;

/// gh-changelog error types
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response other than 404, with the raw response body
    #[error("GitHub API responded with a {status} error!")]
    Fetch {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Failed to decode release: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for gh-changelog operations
pub type Result<T> = std::result::Result<T, ChangelogError>;
