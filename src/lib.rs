//! # n8n-workflows-mcp
//!
//! A minimal MCP server exposing the three GitHub operations actually used
//! for n8n workflow development:
//!
//! - **`search_repositories`**: find workflow template repositories
//! - **`get_file_contents`**: fetch workflow JSON files
//! - **`search_code`**: search for node patterns in workflows
//!
//! Trimming the catalog to three tools keeps the schema payload presented to
//! a calling agent small compared to a full GitHub server.
//!
//! ## Architecture
//!
//! 1. **[`github`]**: thin async client for the GitHub REST API.
//! 2. **[`catalog`]**: the static tool descriptors advertised to clients.
//! 3. **[`dispatch`]**: maps tool calls onto API requests and post-processes
//!    results (base64 file content decoding).
//! 4. **[`server`]**: the rmcp `ServerHandler` gluing the pieces together.
//!
//! ## Example
//! ```no_run
//! use n8n_workflows_mcp::{GitHubClient, WorkflowsServer};
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GitHubClient::from_env()?;
//!     let service = WorkflowsServer::new(client).serve(stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod dispatch;
pub mod github;
pub mod server;

pub use dispatch::ToolError;
pub use github::{GitHubClient, GitHubError};
pub use server::WorkflowsServer;

// Re-export rmcp for convenience
pub use rmcp;
