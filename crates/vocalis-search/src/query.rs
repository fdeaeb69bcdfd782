//! Query types for the knowledge index search API.

use serde::Serialize;

/// Ranking mode requested from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Full-text keyword ranking.
    Full,
    /// Semantic re-ranking over the lexical result set.
    Semantic,
}

/// Vector similarity sub-query over an embedding field.
///
/// The index vectorizes `text` itself; the client never computes embeddings.
#[derive(Debug, Clone, Serialize)]
pub struct VectorQuery {
    /// Sub-query kind understood by the index.
    pub kind: &'static str,
    /// Text to vectorize and match against the embedding field.
    pub text: String,
    /// Number of nearest neighbors to retrieve.
    pub k: usize,
    /// Embedding field to search.
    pub fields: String,
}

impl VectorQuery {
    /// Creates a vectorizable-text sub-query.
    pub fn text(text: impl Into<String>, k: usize, fields: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
            k,
            fields: fields.into(),
        }
    }
}

/// A search request against the knowledge index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Search text.
    pub search: String,
    /// Ranking mode.
    pub query_type: QueryKind,
    /// Semantic ranking profile, required for [`QueryKind::Semantic`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_configuration: Option<String>,
    /// Comma-separated list of fields the text query is restricted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<String>,
    /// Comma-separated projection list.
    pub select: String,
    /// Maximum number of hits to return.
    pub top: usize,
    /// Vector similarity sub-queries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vector_queries: Vec<VectorQuery>,
}

impl SearchQuery {
    /// Creates a full-text query.
    pub fn full(search: impl Into<String>, select: impl Into<String>, top: usize) -> Self {
        Self {
            search: search.into(),
            query_type: QueryKind::Full,
            semantic_configuration: None,
            search_fields: None,
            select: select.into(),
            top,
            vector_queries: Vec::new(),
        }
    }

    /// Creates a semantically re-ranked query with the given profile.
    pub fn semantic(
        search: impl Into<String>,
        profile: impl Into<String>,
        select: impl Into<String>,
        top: usize,
    ) -> Self {
        Self {
            search: search.into(),
            query_type: QueryKind::Semantic,
            semantic_configuration: Some(profile.into()),
            search_fields: None,
            select: select.into(),
            top,
            vector_queries: Vec::new(),
        }
    }

    /// Restricts the text query to the given fields.
    pub fn with_search_fields(mut self, fields: impl Into<String>) -> Self {
        self.search_fields = Some(fields.into());
        self
    }

    /// Adds a vector similarity sub-query.
    pub fn with_vector_query(mut self, query: VectorQuery) -> Self {
        self.vector_queries.push(query);
        self
    }
}
