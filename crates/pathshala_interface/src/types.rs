//! Tool definitions shared by drivers.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Name the model uses to call the web-search capability.
pub const SEARCH_WEB_TOOL: &str = "searchWeb";

/// Definition of a tool/function that the model can call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool/function
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON Schema defining the parameters this tool accepts
    pub parameters: serde_json::Value,
}

/// The `searchWeb` tool: one string parameter `query`.
pub fn search_web_tool() -> ToolDefinition {
    ToolDefinition {
        name: SEARCH_WEB_TOOL.to_string(),
        description: "Searches the web for up-to-date information about a topic, \
                      including authors, their biographies and their works."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query."
                }
            },
            "required": ["query"]
        }),
    }
}
