//! The static catalog of tools advertised to clients.
//!
//! Only the three GitHub operations used for n8n workflow development are
//! exposed; the remaining two dozen tools of a full GitHub server are left
//! out to keep the surface presented to the agent small.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{json, Value};

/// All tools exposed by this server, in stable order.
pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "search_repositories",
            "Search for GitHub repositories containing n8n workflows",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (GitHub search syntax)"
                    },
                    "perPage": {
                        "type": "number",
                        "description": "Results per page (default: 30, max: 100)"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number (default: 1)"
                    }
                },
                "required": ["query"]
            }),
        ),
        tool(
            "get_file_contents",
            "Get contents of a file from a GitHub repository (typically n8n workflow JSON)",
            json!({
                "type": "object",
                "properties": {
                    "owner": {
                        "type": "string",
                        "description": "Repository owner (default: Zie619)"
                    },
                    "repo": {
                        "type": "string",
                        "description": "Repository name (default: n8n-workflows)"
                    },
                    "path": {
                        "type": "string",
                        "description": "Path to the file"
                    },
                    "branch": {
                        "type": "string",
                        "description": "Branch name (optional)"
                    }
                },
                "required": ["path"]
            }),
        ),
        tool(
            "search_code",
            "Search for code patterns in GitHub repositories (e.g., find n8n node configurations)",
            json!({
                "type": "object",
                "properties": {
                    "q": {
                        "type": "string",
                        "description": "Search query (GitHub code search syntax)"
                    },
                    "per_page": {
                        "type": "number",
                        "description": "Results per page (max: 100)"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number"
                    }
                },
                "required": ["q"]
            }),
        ),
    ]
}

fn tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    let schema: JsonObject = match schema {
        Value::Object(map) => map,
        _ => JsonObject::default(),
    };
    Tool::new(name, description, Arc::new(schema))
}
