//! Search backend trait and document type.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SearchResult;
use crate::query::SearchQuery;

/// A document returned by the index, projected to the requested fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SearchDocument(pub Map<String, Value>);

impl SearchDocument {
    /// Returns a projected field as a string, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

/// Trait for knowledge index backends.
///
/// Implementations must be safe for concurrent use; one backend instance is
/// shared across all in-flight tool invocations.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Executes a query and returns the ranked documents.
    async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<SearchDocument>>;
}
