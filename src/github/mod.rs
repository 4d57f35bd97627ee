//! GitHub release fetcher
//!
//! Looks up a single release through the GitHub REST API, either by tag or
//! the repository's latest release. One blocking request, no retries.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};

use crate::config::Config;
use crate::error::{ChangelogError, Result};
use crate::models::{FetchOutcome, ReleaseQuery, ReleaseRecord};

/// User-Agent sent with every request; GitHub rejects anonymous agents.
const USER_AGENT_VALUE: &str = concat!("gh-changelog/", env!("CARGO_PKG_VERSION"));

/// Fetches release metadata from the GitHub REST API
pub struct ReleaseFetcher {
    client: Client,
    api_base: Url,
    token: Option<String>,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for ReleaseFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseFetcher")
            .field("api_base", &self.api_base.as_str())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl ReleaseFetcher {
    /// Create a fetcher for the configured API base.
    ///
    /// `token` is attached as a bearer token when present.
    pub fn new(config: &Config, token: Option<String>) -> Result<Self> {
        let api_base = Url::parse(&config.api_base).map_err(|e| {
            ChangelogError::Config(format!("Invalid api_base '{}': {}", config.api_base, e))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ChangelogError::Config(format!(
                "Invalid api_base '{}': not a base URL",
                config.api_base
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers
    }

    /// Build the release lookup URL for a query.
    ///
    /// Each path segment is percent-encoded, so tags containing `/` stay intact.
    pub fn release_url(&self, query: &ReleaseQuery) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "repos",
                query.repo.owner(),
                query.repo.name(),
                "releases",
            ]);
            match &query.tag {
                Some(tag) => {
                    segments.extend(["tags", tag.as_str()]);
                }
                None => {
                    segments.push("latest");
                }
            }
        }
        url
    }

    /// Fetch the release described by `query`.
    ///
    /// A 404 is reported as [`FetchOutcome::NotFound`]; any other non-2xx
    /// status becomes [`ChangelogError::Fetch`] carrying the response body.
    pub fn fetch(&self, query: &ReleaseQuery) -> Result<FetchOutcome> {
        let url = self.release_url(query);
        tracing::debug!(url = %url, authenticated = self.token.is_some(), "fetching release");

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send()?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "GitHub API responded");

        if status == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }

        let body = response.text()?;
        if !status.is_success() {
            return Err(ChangelogError::Fetch {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let record: ReleaseRecord = serde_json::from_str(&body)?;
        Ok(FetchOutcome::Found(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoSlug;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query(tag: Option<&str>) -> ReleaseQuery {
        let repo: RepoSlug = "owner/project".parse().unwrap();
        ReleaseQuery::new(repo, tag.map(str::to_string))
    }

    fn fetcher_for(api_base: &str, token: Option<&str>) -> ReleaseFetcher {
        let config = Config {
            api_base: api_base.to_string(),
            ..Config::default()
        };
        ReleaseFetcher::new(&config, token.map(str::to_string)).unwrap()
    }

    /// Start a mock server; the runtime must outlive the test body.
    fn start_server() -> (Runtime, MockServer) {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        (runtime, server)
    }

    fn release_json() -> serde_json::Value {
        serde_json::json!({
            "tag_name": "v1.2.0",
            "name": "Big Release",
            "published_at": "2024-01-01T00:00:00Z",
            "body": "Fixed bug"
        })
    }

    #[test]
    fn test_release_url_latest() {
        let fetcher = fetcher_for("https://api.github.com", None);
        assert_eq!(
            fetcher.release_url(&query(None)).as_str(),
            "https://api.github.com/repos/owner/project/releases/latest"
        );
    }

    #[test]
    fn test_release_url_tag() {
        let fetcher = fetcher_for("https://api.github.com", None);
        assert_eq!(
            fetcher.release_url(&query(Some("1.0.0"))).as_str(),
            "https://api.github.com/repos/owner/project/releases/tags/1.0.0"
        );
    }

    #[test]
    fn test_release_url_keeps_base_path() {
        let fetcher = fetcher_for("https://ghe.example.com/api/v3/", None);
        assert_eq!(
            fetcher.release_url(&query(None)).as_str(),
            "https://ghe.example.com/api/v3/repos/owner/project/releases/latest"
        );
    }

    #[test]
    fn test_release_url_encodes_tag_with_slash() {
        let fetcher = fetcher_for("https://api.github.com", None);
        assert_eq!(
            fetcher.release_url(&query(Some("release/1.0"))).as_str(),
            "https://api.github.com/repos/owner/project/releases/tags/release%2F1.0"
        );
    }

    #[test]
    fn test_new_rejects_invalid_api_base() {
        let config = Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        };
        let result = ReleaseFetcher::new(&config, None);
        assert!(matches!(result, Err(ChangelogError::Config(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let fetcher = fetcher_for("https://api.github.com", Some("secret"));
        let debug = format!("{:?}", fetcher);
        assert!(debug.contains("has_token: true"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_fetch_tagged_release() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/repos/owner/project/releases/tags/v1.2.0"))
                .respond_with(ResponseTemplate::new(200).set_body_json(release_json()))
                .expect(1)
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        let outcome = fetcher.fetch(&query(Some("v1.2.0"))).unwrap();

        match outcome {
            FetchOutcome::Found(record) => {
                assert_eq!(record.tag_name, "v1.2.0");
                assert_eq!(record.name.as_deref(), Some("Big Release"));
            }
            FetchOutcome::NotFound => panic!("Expected Found"),
        }
    }

    #[test]
    fn test_fetch_sends_bearer_token() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/repos/owner/project/releases/latest"))
                .and(header("authorization", "Bearer secret"))
                .respond_with(ResponseTemplate::new(200).set_body_json(release_json()))
                .expect(1)
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), Some("secret"));
        let outcome = fetcher.fetch(&query(None)).unwrap();
        assert!(matches!(outcome, FetchOutcome::Found(_)));
    }

    #[test]
    fn test_fetch_without_token_sends_no_authorization() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/repos/owner/project/releases/latest"))
                .respond_with(ResponseTemplate::new(200).set_body_json(release_json()))
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        fetcher.fetch(&query(None)).unwrap();

        let requests = runtime.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
        assert!(requests[0].headers.get("user-agent").is_some());
    }

    #[test]
    fn test_fetch_not_found() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .respond_with(
                    ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
                )
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        let outcome = fetcher.fetch(&query(Some("9.9.9"))).unwrap();
        assert_eq!(outcome, FetchOutcome::NotFound);
    }

    #[test]
    fn test_fetch_server_error_carries_body() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"message":"rate limited"}"#))
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        let err = fetcher.fetch(&query(None)).unwrap_err();

        match err {
            ChangelogError::Fetch { status, url, body } => {
                assert_eq!(status, 403);
                assert!(url.ends_with("/repos/owner/project/releases/latest"));
                assert_eq!(body, r#"{"message":"rate limited"}"#);
            }
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_invalid_json_is_decode_error() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        let err = fetcher.fetch(&query(None)).unwrap_err();
        assert!(matches!(err, ChangelogError::Decode(_)));
    }

    #[test]
    fn test_fetch_missing_fields_is_decode_error() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "x"})),
                )
                .mount(&server),
        );

        let fetcher = fetcher_for(&server.uri(), None);
        let err = fetcher.fetch(&query(None)).unwrap_err();
        assert!(matches!(err, ChangelogError::Decode(_)));
    }
}
