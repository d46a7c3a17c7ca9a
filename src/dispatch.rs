//! Tool dispatch: maps tool calls onto GitHub API requests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::github::{GitHubClient, GitHubError};

/// Owner of the repository searches fall back to.
pub const DEFAULT_OWNER: &str = "Zie619";

/// Repository searches fall back to.
pub const DEFAULT_REPO: &str = "n8n-workflows";

const DEFAULT_PER_PAGE: u64 = 30;
const MAX_PER_PAGE: u64 = 100;

/// Errors that can occur while resolving or executing a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error("Invalid base64 in file content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("File content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The closed set of tools this server dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolKind {
    SearchRepositories,
    GetFileContents,
    SearchCode,
}

impl ToolKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "search_repositories" => Some(Self::SearchRepositories),
            "get_file_contents" => Some(Self::GetFileContents),
            "search_code" => Some(Self::SearchCode),
            _ => None,
        }
    }
}

/// Execute a tool call and convert the outcome into a [`CallToolResult`].
///
/// This is the single error boundary of the tool layer: successes come back
/// as pretty-printed JSON text, and every failure along the call path is
/// flattened here into an error-flagged result of the form `Error: <message>`.
/// Nothing is raised past this function.
pub async fn call_tool(client: &GitHubClient, name: &str, args: &JsonObject) -> CallToolResult {
    match dispatch(client, name, args).await {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            CallToolResult::success(vec![Content::text(text)])
        }
        Err(e) => {
            tracing::debug!("tool {} failed: {}", name, e);
            CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
        }
    }
}

async fn dispatch(
    client: &GitHubClient,
    name: &str,
    args: &JsonObject,
) -> Result<Value, ToolError> {
    let kind =
        ToolKind::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    match kind {
        ToolKind::SearchRepositories => search_repositories(client, parse_args(args)?).await,
        ToolKind::GetFileContents => get_file_contents(client, parse_args(args)?).await,
        ToolKind::SearchCode => search_code(client, parse_args(args)?).await,
    }
}

/// Deserialize the argument bag into a typed struct. Unknown keys are
/// ignored; required keys are checked by the individual handlers so missing
/// ones surface as [`ToolError::MissingArgument`] rather than a serde error.
fn parse_args<T: DeserializeOwned>(args: &JsonObject) -> Result<T, ToolError> {
    Ok(serde_json::from_value(Value::Object(args.clone()))?)
}

#[derive(Debug, Deserialize)]
struct SearchRepositoriesArgs {
    query: Option<String>,
    #[serde(rename = "perPage")]
    per_page: Option<u64>,
    page: Option<u64>,
}

async fn search_repositories(
    client: &GitHubClient,
    args: SearchRepositoriesArgs,
) -> Result<Value, ToolError> {
    let query = args.query.ok_or(ToolError::MissingArgument("query"))?;
    let per_page = args.per_page.unwrap_or(DEFAULT_PER_PAGE).min(MAX_PER_PAGE);
    let page = args.page.unwrap_or(1);

    let result = client
        .get(
            "/search/repositories",
            &[
                ("q", query),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await?;
    Ok(result)
}

#[derive(Debug, Deserialize)]
struct GetFileContentsArgs {
    owner: Option<String>,
    repo: Option<String>,
    path: Option<String>,
    branch: Option<String>,
}

async fn get_file_contents(
    client: &GitHubClient,
    args: GetFileContentsArgs,
) -> Result<Value, ToolError> {
    let path = args.path.ok_or(ToolError::MissingArgument("path"))?;
    let owner = args.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string());
    let repo = args.repo.unwrap_or_else(|| DEFAULT_REPO.to_string());

    let endpoint = format!("/repos/{owner}/{repo}/contents/{path}");
    let query = match args.branch {
        Some(branch) => vec![("ref", branch)],
        None => Vec::new(),
    };

    let mut result = client.get(&endpoint, &query).await?;
    attach_decoded_content(&mut result)?;
    Ok(result)
}

#[derive(Debug, Deserialize)]
struct SearchCodeArgs {
    q: Option<String>,
    per_page: Option<u64>,
    page: Option<u64>,
}

async fn search_code(client: &GitHubClient, args: SearchCodeArgs) -> Result<Value, ToolError> {
    let q = args.q.ok_or(ToolError::MissingArgument("q"))?;
    let query = scope_to_default_repo(q);
    let per_page = args.per_page.unwrap_or(DEFAULT_PER_PAGE).min(MAX_PER_PAGE);
    let page = args.page.unwrap_or(1);

    let result = client
        .get(
            "/search/code",
            &[
                ("q", query),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await?;
    Ok(result)
}

/// Scope an unscoped code search query to the default repository.
fn scope_to_default_repo(q: String) -> String {
    if q.contains("repo:") {
        q
    } else {
        format!("{q} repo:{DEFAULT_OWNER}/{DEFAULT_REPO}")
    }
}

/// Decode a base64 `content` field into a `decoded_content` sibling.
///
/// Only applies when the response object says `encoding: "base64"` and
/// carries a non-empty `content` field; anything else passes through
/// untouched. The original `content` and `encoding` fields are preserved.
/// GitHub wraps base64 payloads at 60 columns, so embedded whitespace is
/// stripped before decoding.
fn attach_decoded_content(value: &mut Value) -> Result<(), ToolError> {
    let Some(object) = value.as_object_mut() else {
        return Ok(());
    };
    if object.get("encoding").and_then(Value::as_str) != Some("base64") {
        return Ok(());
    }
    let Some(content) = object.get("content").and_then(Value::as_str) else {
        return Ok(());
    };
    if content.is_empty() {
        return Ok(());
    }

    let packed: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(packed.as_bytes())?;
    let text = String::from_utf8(bytes)?;
    object.insert("decoded_content".to_string(), Value::String(text));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unscoped_code_query_gets_default_repo() {
        assert_eq!(
            scope_to_default_repo("httpRequest".to_string()),
            "httpRequest repo:Zie619/n8n-workflows"
        );
    }

    #[test]
    fn scoped_code_query_is_left_alone() {
        assert_eq!(
            scope_to_default_repo("x repo:foo/bar".to_string()),
            "x repo:foo/bar"
        );
    }

    #[test]
    fn decodes_base64_content_and_keeps_original_fields() {
        let mut value = json!({
            "content": "eyJhIjoxfQ==",
            "encoding": "base64"
        });
        attach_decoded_content(&mut value).unwrap();

        assert_eq!(value["decoded_content"], json!("{\"a\":1}"));
        assert_eq!(value["content"], json!("eyJhIjoxfQ=="));
        assert_eq!(value["encoding"], json!("base64"));
    }

    #[test]
    fn decodes_content_with_line_breaks() {
        // GitHub returns base64 wrapped in newlines.
        let mut value = json!({
            "content": "eyJh\nIjox\nfQ==\n",
            "encoding": "base64"
        });
        attach_decoded_content(&mut value).unwrap();
        assert_eq!(value["decoded_content"], json!("{\"a\":1}"));
    }

    #[test]
    fn skips_decoding_when_content_is_missing_or_empty() {
        let mut missing = json!({ "encoding": "base64" });
        attach_decoded_content(&mut missing).unwrap();
        assert!(missing.get("decoded_content").is_none());

        let mut empty = json!({ "content": "", "encoding": "base64" });
        attach_decoded_content(&mut empty).unwrap();
        assert!(empty.get("decoded_content").is_none());
    }

    #[test]
    fn skips_decoding_for_other_encodings() {
        let mut value = json!({ "content": "plain text", "encoding": "utf-8" });
        attach_decoded_content(&mut value).unwrap();
        assert!(value.get("decoded_content").is_none());
    }

    #[test]
    fn directory_listings_pass_through() {
        // Listing a directory returns an array, not a file object.
        let mut value = json!([{ "name": "a.json" }, { "name": "b.json" }]);
        attach_decoded_content(&mut value).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let mut value = json!({ "content": "!!!not base64!!!", "encoding": "base64" });
        assert!(attach_decoded_content(&mut value).is_err());
    }
}
