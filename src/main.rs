//! Stdio entry point for the n8n-workflows MCP server.
//!
//! GitHub token from env `GITHUB_TOKEN` (optional, increases rate limit).
//! Logs go to stderr; stdout carries the MCP transport.

use n8n_workflows_mcp::{GitHubClient, WorkflowsServer};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = GitHubClient::from_env()?;
    let service = WorkflowsServer::new(client).serve(stdio()).await?;
    tracing::info!("n8n-workflows-minimal MCP server running");
    service.waiting().await?;
    Ok(())
}
