//! Citation grounding validator.

use std::sync::Arc;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};
use vocalis_search::SearchService;

use crate::TRACING_TARGET;
use crate::contract::ToolContract;
use crate::error::{Result, ToolError};
use crate::registry::ToolHandler;
use crate::result::ToolResult;

/// Pattern a citation key must match to be used in a query.
///
/// Keys come from model output and are untrusted; anything outside this
/// alphabet is dropped before it can reach the query string.
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_=-]+$").unwrap());

/// Keeps only citation keys matching the identifier pattern.
///
/// Malformed keys are dropped silently; this is a defensive filter, not a
/// failure path.
pub fn sanitize_keys(keys: &[String]) -> Vec<&str> {
    keys.iter()
        .map(String::as_str)
        .filter(|key| KEY_PATTERN.is_match(key))
        .collect()
}

/// Joins sanitized keys into a disjunctive keyword query.
pub fn build_disjunction(keys: &[&str]) -> String {
    keys.join(" OR ")
}

/// Arguments for the grounding tool.
#[derive(Debug, Deserialize)]
struct GroundingArgs {
    /// Source names the model claims to have used.
    sources: Vec<String>,
}

/// Tool resolving claimed citation keys back to full source records.
///
/// Sanitized keys are joined with OR and looked up with a keyword search
/// restricted to the identifier field; resolved records are returned to the
/// end client for citation display. If no key survives sanitization the
/// tool short-circuits to an empty source list without touching the index.
pub struct GroundingTool {
    service: Arc<SearchService>,
}

impl GroundingTool {
    /// Creates a grounding tool over a shared service.
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { service }
    }

    /// The contract registered for this tool.
    pub fn contract() -> ToolContract {
        ToolContract::new(
            "report_grounding",
            "Report use of a source from the knowledge base as part of an answer (effectively, \
             cite the source). Sources appear in square brackets before each knowledge base \
             passage. Always use this tool to cite sources when responding with information from \
             the knowledge base.",
            json!({
                "type": "object",
                "properties": {
                    "sources": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "List of source names from last statement actually used, \
                                        do not include the ones not used to formulate a response"
                    }
                },
                "required": ["sources"],
                "additionalProperties": false
            }),
        )
    }
}

#[async_trait]
impl ToolHandler for GroundingTool {
    #[tracing::instrument(target = "vocalis_tools", skip_all)]
    async fn call(&self, args: Value) -> Result<ToolResult> {
        let args: GroundingArgs =
            serde_json::from_value(args).map_err(|error| ToolError::schema(error.to_string()))?;

        let keys = sanitize_keys(&args.sources);
        let dropped = args.sources.len() - keys.len();
        if dropped > 0 {
            tracing::debug!(
                target: TRACING_TARGET,
                dropped,
                "Dropped malformed citation keys"
            );
        }

        if keys.is_empty() {
            return Ok(ToolResult::client_json(json!({"sources": []})));
        }

        let disjunction = build_disjunction(&keys);
        tracing::debug!(
            target: TRACING_TARGET,
            query = %disjunction,
            "Resolving grounding sources"
        );
        let sources = self.service.keyword_lookup(&disjunction, keys.len()).await?;

        Ok(ToolResult::client_json(json!({"sources": sources})))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use url::Url;
    use vocalis_search::{
        SearchBackend, SearchClientConfig, SearchDocument, SearchQuery, SearchResult,
    };

    use super::*;
    use crate::result::ToolResultDirection;

    #[test]
    fn test_sanitize_keeps_identifier_alphabet() {
        let keys = vec![
            "INC1003".to_string(),
            "chunk_01=-".to_string(),
            "bad key!".to_string(),
            "quote'".to_string(),
            String::new(),
        ];
        assert_eq!(sanitize_keys(&keys), vec!["INC1003", "chunk_01=-"]);
    }

    #[test]
    fn test_build_disjunction() {
        assert_eq!(build_disjunction(&["a", "b", "c"]), "a OR b OR c");
        assert_eq!(build_disjunction(&["only"]), "only");
        assert_eq!(build_disjunction(&[]), "");
    }

    struct CountingBackend {
        calls: Mutex<usize>,
        documents: Vec<serde_json::Value>,
    }

    #[async_trait]
    impl SearchBackend for CountingBackend {
        async fn search(&self, _query: &SearchQuery) -> SearchResult<Vec<SearchDocument>> {
            *self.calls.lock().unwrap() += 1;
            Ok(self
                .documents
                .iter()
                .map(|doc| serde_json::from_value(doc.clone()).unwrap())
                .collect())
        }
    }

    fn tool(backend: Arc<CountingBackend>) -> GroundingTool {
        let endpoint = Url::parse("https://search.example.com").unwrap();
        let config = SearchClientConfig::new(endpoint, "knowledge");
        let service = SearchService::new(backend, config);
        GroundingTool::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_malformed_keys_are_dropped_not_reported() {
        let backend = Arc::new(CountingBackend {
            calls: Mutex::new(0),
            documents: vec![json!({
                "chunk_id": "INC1003",
                "title": "Password reset",
                "chunk": "Check your spam folder.",
            })],
        });
        let result = tool(backend.clone())
            .call(json!({"sources": ["INC1003", "bad key!"]}))
            .await
            .unwrap();

        assert_eq!(result.direction, ToolResultDirection::ToClient);
        let sources = &result.as_json().unwrap()["sources"];
        assert_eq!(sources.as_array().unwrap().len(), 1);
        assert_eq!(sources[0]["id"], "INC1003");
        assert_eq!(*backend.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_all_invalid_keys_short_circuit() {
        let backend = Arc::new(CountingBackend {
            calls: Mutex::new(0),
            documents: vec![],
        });
        let result = tool(backend.clone())
            .call(json!({"sources": ["bad key!", "worse;key"]}))
            .await
            .unwrap();

        assert_eq!(result.as_json(), Some(&json!({"sources": []})));
        // The backend must not see a degenerate empty disjunction.
        assert_eq!(*backend.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_output_ids_round_trip_as_keys() {
        // Identifiers rendered by the search tool must pass sanitization.
        let rendered_id = "INC1003";
        assert_eq!(sanitize_keys(&[rendered_id.to_string()]), vec![rendered_id]);
    }
}
