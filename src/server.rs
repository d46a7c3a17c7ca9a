//! MCP server handler wiring the tool catalog and dispatcher together.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};

use crate::catalog;
use crate::dispatch;
use crate::github::GitHubClient;

/// MCP server exposing a minimal GitHub toolset for n8n workflow development.
///
/// Tool failures are reported as error-flagged tool results, never as
/// protocol-level faults, so a failed call leaves the server serving the
/// next one.
#[derive(Debug, Clone)]
pub struct WorkflowsServer {
    client: GitHubClient,
}

impl WorkflowsServer {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

impl ServerHandler for WorkflowsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "n8n-workflows-minimal".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Minimal GitHub toolset for n8n workflow development: \
                 search_repositories finds workflow templates, get_file_contents \
                 fetches workflow JSON files, search_code finds node patterns. \
                 Set GITHUB_TOKEN for a higher rate limit."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: catalog::tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("tool call: {}", request.name);
        let args = request.arguments.unwrap_or_default();
        Ok(dispatch::call_tool(&self.client, &request.name, &args).await)
    }
}
