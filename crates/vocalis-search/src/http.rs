//! HTTP backend for the knowledge index search API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use vocalis_core::Credential;

use crate::TRACING_TARGET;
use crate::backend::{SearchBackend, SearchDocument};
use crate::config::SearchClientConfig;
use crate::error::{SearchError, SearchResult};
use crate::query::SearchQuery;

/// Response envelope returned by the index.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<SearchDocument>,
}

/// Inner client that holds the HTTP client, configuration and credential.
struct HttpSearchBackendInner {
    http: Client,
    config: SearchClientConfig,
    credential: Credential,
}

impl std::fmt::Debug for HttpSearchBackendInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSearchBackendInner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// HTTP backend speaking the index's JSON search API.
///
/// Queries are POSTed to `{endpoint}/indexes/{index}/docs/search`; the
/// response envelope is `{"value": [ ...documents... ]}`. The backend is
/// cheap to clone and safe to share across concurrent invocations.
#[derive(Clone, Debug)]
pub struct HttpSearchBackend {
    inner: Arc<HttpSearchBackendInner>,
}

impl HttpSearchBackend {
    /// Creates a new backend for the given configuration and credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: SearchClientConfig, credential: Credential) -> SearchResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        tracing::debug!(
            target: TRACING_TARGET,
            endpoint = %config.endpoint,
            index = %config.index,
            "Search backend created"
        );

        Ok(Self {
            inner: Arc::new(HttpSearchBackendInner {
                http,
                config,
                credential,
            }),
        })
    }

    /// Gets the backend configuration.
    pub fn config(&self) -> &SearchClientConfig {
        &self.inner.config
    }

    fn search_url(&self) -> String {
        let config = &self.inner.config;
        format!(
            "{}/indexes/{}/docs/search",
            config.endpoint.as_str().trim_end_matches('/'),
            config.index
        )
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<SearchDocument>> {
        let inner = &self.inner;

        let mut request = inner.http.post(self.search_url()).json(query);
        request = match &inner.credential {
            Credential::ApiKey(key) => request.header("api-key", key),
            Credential::Token(provider) => {
                let token = provider.access_token(&inner.config.token_scope).await?;
                request.bearer_auth(token)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: TRACING_TARGET,
                status = status.as_u16(),
                index = %inner.config.index,
                "Index query failed"
            );
            return Err(SearchError::upstream(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(
            target: TRACING_TARGET,
            hits = body.value.len(),
            index = %inner.config.index,
            "Index query completed"
        );
        Ok(body.value)
    }
}
