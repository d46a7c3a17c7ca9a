//! HTTP client for the GitHub REST API.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Base URL of the GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

/// Environment variable holding the optional API token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const USER_AGENT: &str = "n8n-workflows-mcp";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {status}")]
    Api { status: StatusCode },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Options for a single API request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method. GET when not set.
    pub method: Option<Method>,
    /// Query parameters appended to the endpoint path.
    pub query: Vec<(String, String)>,
    /// JSON request body.
    pub body: Option<Value>,
    /// Extra headers. These win over the client defaults on collision.
    pub headers: HashMap<String, String>,
}

/// GitHub REST API client.
///
/// Holds the base URL and, when configured, a bearer token attached to every
/// request. Anonymous access works with a lower rate limit. Cloning is cheap;
/// the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against `base_url` with an optional bearer token.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| GitHubError::Config(format!("invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client for `api.github.com`, reading the token from
    /// `GITHUB_TOKEN`. An unset or empty variable means anonymous access.
    pub fn from_env() -> Result<Self, GitHubError> {
        let token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
        Self::new(GITHUB_API, token)
    }

    /// GET an endpoint with query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, GitHubError> {
        let options = RequestOptions {
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            ..Default::default()
        };
        self.request(path, options).await
    }

    /// Perform one API request and parse the response body as JSON.
    ///
    /// Exactly one network round trip; no retries. Non-2xx statuses are
    /// reported as [`GitHubError::Api`] without reading the body.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, GitHubError> {
        let url = format!("{}{}", self.base_url, path);
        let method = options.method.unwrap_or(Method::GET);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        for (key, value) in &options.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Api { status });
        }

        let bytes = response.bytes().await?;
        if let Ok(text) = std::str::from_utf8(&bytes) {
            tracing::debug!("API response ({} bytes):\n{}", text.len(), text);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
