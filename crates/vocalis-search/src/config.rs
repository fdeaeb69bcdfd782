//! Configuration for the knowledge index client.

use std::time::Duration;

use url::Url;

use crate::error::{SearchError, SearchResult};

/// Default timeout for index requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default token scope requested for token-based credentials.
pub const DEFAULT_TOKEN_SCOPE: &str = "search";

/// Configuration for the knowledge index client.
///
/// Field names describe how documents are laid out in the index: the
/// identifier, title and content fields are projected into results, the
/// embedding field carries the vectors used for similarity sub-queries.
#[derive(Debug, Clone)]
pub struct SearchClientConfig {
    /// Base endpoint of the search service.
    pub endpoint: Url,
    /// Name of the index holding the knowledge base.
    pub index: String,
    /// Semantic ranking profile requested for hybrid queries.
    pub semantic_profile: String,
    /// Document field holding the chunk identifier.
    pub id_field: String,
    /// Document field holding the chunk title.
    pub title_field: String,
    /// Document field holding the chunk content.
    pub content_field: String,
    /// Document field holding the embedding vector.
    pub embedding_field: String,
    /// Whether hybrid queries include a vector similarity sub-query.
    pub use_vector_query: bool,
    /// Scope requested when exchanging token credentials.
    pub token_scope: String,
    /// Timeout for index requests.
    pub timeout: Duration,
    /// User-Agent header sent with index requests.
    pub user_agent: String,
}

impl SearchClientConfig {
    /// Creates a configuration for the given endpoint and index with
    /// default field names.
    pub fn new(endpoint: Url, index: impl Into<String>) -> Self {
        Self {
            endpoint,
            index: index.into(),
            semantic_profile: "default".into(),
            id_field: "chunk_id".into(),
            title_field: "title".into(),
            content_field: "chunk".into(),
            embedding_field: "text_vector".into(),
            use_vector_query: true,
            token_scope: DEFAULT_TOKEN_SCOPE.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        }
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("vocalis/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Sets the semantic ranking profile.
    pub fn with_semantic_profile(mut self, profile: impl Into<String>) -> Self {
        self.semantic_profile = profile.into();
        self
    }

    /// Sets the identifier field name.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Sets the title field name.
    pub fn with_title_field(mut self, field: impl Into<String>) -> Self {
        self.title_field = field.into();
        self
    }

    /// Sets the content field name.
    pub fn with_content_field(mut self, field: impl Into<String>) -> Self {
        self.content_field = field.into();
        self
    }

    /// Sets the embedding field name.
    pub fn with_embedding_field(mut self, field: impl Into<String>) -> Self {
        self.embedding_field = field.into();
        self
    }

    /// Enables or disables the vector similarity sub-query.
    pub fn with_vector_query(mut self, enabled: bool) -> Self {
        self.use_vector_query = enabled;
        self
    }

    /// Sets the token scope.
    pub fn with_token_scope(mut self, scope: impl Into<String>) -> Self {
        self.token_scope = scope.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SearchResult<()> {
        if self.endpoint.host_str().is_none() {
            return Err(SearchError::invalid_config("endpoint has no host"));
        }
        if self.index.is_empty() {
            return Err(SearchError::invalid_config("index name is empty"));
        }
        for (name, value) in [
            ("id_field", &self.id_field),
            ("title_field", &self.title_field),
            ("content_field", &self.content_field),
            ("embedding_field", &self.embedding_field),
        ] {
            if value.is_empty() {
                return Err(SearchError::invalid_config(format!("{name} is empty")));
            }
        }
        Ok(())
    }
}
