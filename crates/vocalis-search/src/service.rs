//! Shared facade assembling hybrid and keyword queries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::backend::{SearchBackend, SearchDocument};
use crate::config::SearchClientConfig;
use crate::error::SearchResult;
use crate::query::{SearchQuery, VectorQuery};

/// Number of ranked hits requested for knowledge retrieval.
pub const TOP_HITS: usize = 5;

/// Number of nearest neighbors requested from the vector sub-query.
pub const VECTOR_NEIGHBORS: usize = 50;

/// One retrieved knowledge base passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Chunk identifier.
    pub id: String,
    /// Passage content.
    pub content: String,
}

/// A fully resolved citation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Chunk identifier.
    pub id: String,
    /// Chunk title.
    pub title: String,
    /// Chunk content.
    pub content: String,
}

/// Service facade over a shared [`SearchBackend`].
///
/// Owns the index field layout and builds the two query shapes the tool
/// layer needs: hybrid retrieval over the content field and keyword lookup
/// over the identifier field. Created once at attach time and shared across
/// all in-flight invocations.
#[derive(Clone)]
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    config: SearchClientConfig,
}

impl SearchService {
    /// Creates a service over the given backend.
    pub fn new(backend: Arc<dyn SearchBackend>, config: SearchClientConfig) -> Self {
        Self { backend, config }
    }

    /// Gets the service configuration.
    pub fn config(&self) -> &SearchClientConfig {
        &self.config
    }

    /// Runs a hybrid query over the knowledge base.
    ///
    /// Combines full-text ranking with semantic re-ranking and, when enabled,
    /// a vector similarity sub-query over the embedding field. Returns at
    /// most [`TOP_HITS`] passages in rank order; an empty result set is a
    /// valid outcome, not an error.
    pub async fn hybrid_search(&self, text: &str) -> SearchResult<Vec<SearchHit>> {
        let config = &self.config;
        let select = format!("{},{}", config.id_field, config.content_field);

        let mut query =
            SearchQuery::semantic(text, config.semantic_profile.clone(), select, TOP_HITS);
        if config.use_vector_query {
            query = query.with_vector_query(VectorQuery::text(
                text,
                VECTOR_NEIGHBORS,
                config.embedding_field.clone(),
            ));
        }

        let documents = self.backend.search(&query).await?;
        tracing::debug!(
            target: TRACING_TARGET,
            hits = documents.len(),
            vector = config.use_vector_query,
            "Hybrid search completed"
        );
        Ok(documents
            .iter()
            .map(|doc| SearchHit {
                id: self.projected(doc, &config.id_field),
                content: self.projected(doc, &config.content_field),
            })
            .collect())
    }

    /// Resolves identifiers with a keyword search over the identifier field.
    ///
    /// The identifier field is searchable with a keyword tokenizer rather
    /// than filterable, so this is a full-text query restricted to that
    /// field; an index with a filterable key could use an IN-filter instead.
    pub async fn keyword_lookup(&self, text: &str, top: usize) -> SearchResult<Vec<SourceRecord>> {
        let config = &self.config;
        let select = format!(
            "{},{},{}",
            config.id_field, config.title_field, config.content_field
        );

        let query =
            SearchQuery::full(text, select, top).with_search_fields(config.id_field.clone());

        let documents = self.backend.search(&query).await?;
        tracing::debug!(
            target: TRACING_TARGET,
            resolved = documents.len(),
            "Keyword lookup completed"
        );
        Ok(documents
            .iter()
            .map(|doc| SourceRecord {
                id: self.projected(doc, &config.id_field),
                title: self.projected(doc, &config.title_field),
                content: self.projected(doc, &config.content_field),
            })
            .collect())
    }

    fn projected(&self, document: &SearchDocument, field: &str) -> String {
        document.field_str(field).unwrap_or_default().to_string()
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
