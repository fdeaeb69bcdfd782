//! Knowledge base search executor.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use vocalis_search::SearchService;

use crate::TRACING_TARGET;
use crate::contract::ToolContract;
use crate::error::{Result, ToolError};
use crate::registry::ToolHandler;
use crate::result::ToolResult;

/// Arguments for the search tool.
#[derive(Debug, Deserialize)]
struct SearchArgs {
    /// Search query.
    query: String,
}

/// Tool running a hybrid query against the knowledge index.
///
/// Hits are rendered as attributable blocks, `[<id>]: <content>` followed by
/// a `-----` separator line, concatenated in rank order. Zero hits yield an
/// empty string, not an error.
pub struct SearchTool {
    service: Arc<SearchService>,
}

impl SearchTool {
    /// Creates a search tool over a shared service.
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { service }
    }

    /// The contract registered for this tool.
    pub fn contract() -> ToolContract {
        ToolContract::new(
            "search",
            "Search the knowledge base. The knowledge base is in English, translate to and from \
             English if needed. Results are formatted as a source name first in square brackets, \
             followed by the text content, and a line with '-----' at the end of each result.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        )
    }
}

#[async_trait]
impl ToolHandler for SearchTool {
    #[tracing::instrument(target = "vocalis_tools", skip_all)]
    async fn call(&self, args: Value) -> Result<ToolResult> {
        let args: SearchArgs =
            serde_json::from_value(args).map_err(|error| ToolError::schema(error.to_string()))?;

        tracing::debug!(
            target: TRACING_TARGET,
            query = %args.query,
            "Searching the knowledge base"
        );
        let hits = self.service.hybrid_search(&args.query).await?;

        let mut rendered = String::new();
        for hit in &hits {
            rendered.push_str(&format!("[{}]: {}\n-----\n", hit.id, hit.content));
        }

        tracing::debug!(
            target: TRACING_TARGET,
            hits = hits.len(),
            "Search completed"
        );
        Ok(ToolResult::agent_text(rendered))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use url::Url;
    use vocalis_search::{
        SearchBackend, SearchClientConfig, SearchDocument, SearchQuery, SearchResult,
    };

    use super::*;
    use crate::result::ToolResultDirection;

    struct FixtureBackend {
        documents: Vec<serde_json::Value>,
    }

    #[async_trait]
    impl SearchBackend for FixtureBackend {
        async fn search(&self, _query: &SearchQuery) -> SearchResult<Vec<SearchDocument>> {
            Ok(self
                .documents
                .iter()
                .map(|doc| serde_json::from_value(doc.clone()).unwrap())
                .collect())
        }
    }

    fn tool(documents: Vec<serde_json::Value>) -> SearchTool {
        let endpoint = Url::parse("https://search.example.com").unwrap();
        let config = SearchClientConfig::new(endpoint, "knowledge");
        let service = SearchService::new(Arc::new(FixtureBackend { documents }), config);
        SearchTool::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_search_renders_attributable_blocks() {
        let tool = tool(vec![json!({
            "chunk_id": "INC1003",
            "chunk": "Check your spam folder and confirm the address on file.",
        })]);

        let result = tool.call(json!({"query": "password reset"})).await.unwrap();
        assert_eq!(result.direction, ToolResultDirection::ToAgentContext);
        assert_eq!(
            result.as_text(),
            Some("[INC1003]: Check your spam folder and confirm the address on file.\n-----\n")
        );
    }

    #[tokio::test]
    async fn test_zero_hits_yield_empty_string() {
        let tool = tool(vec![]);
        let result = tool.call(json!({"query": "anything"})).await.unwrap();
        assert_eq!(result.as_text(), Some(""));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_schema_errors() {
        let tool = tool(vec![]);
        let error = tool.call(json!({"q": "typo"})).await.unwrap_err();
        assert!(matches!(error, ToolError::Schema(_)));
    }
}
