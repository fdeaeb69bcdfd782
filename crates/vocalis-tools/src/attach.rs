//! Registrar wiring all tools into the runtime's registry.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use reqwest::Client;
use url::Url;
use vocalis_core::Credential;
use vocalis_search::{HttpSearchBackend, SearchClientConfig, SearchService};

use crate::TRACING_TARGET_REGISTRY;
use crate::error::Result;
use crate::grounding::GroundingTool;
use crate::joke::JokeTool;
use crate::proxy::{RecordKind, RecordLookupTool};
use crate::registry::ToolRegistry;
use crate::search::SearchTool;

/// Default timeout for record service requests: 30 seconds.
pub const DEFAULT_PROXY_TIMEOUT: Duration = Duration::from_secs(30);

/// Default public joke source for the diversion tool.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/jokes/random/1";

static DEFAULT_JOKE_SOURCE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_JOKE_URL).unwrap());

/// Configuration for the record service proxies and the diversion tool.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Base URL of the external record service.
    pub base_url: Url,
    /// URL of the public joke source.
    pub joke_url: Url,
    /// Timeout for proxy requests.
    pub timeout: Duration,
    /// User-Agent header sent with proxy requests.
    pub user_agent: String,
}

impl ProxyConfig {
    /// Creates a proxy configuration for the given record service.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            joke_url: DEFAULT_JOKE_SOURCE.clone(),
            timeout: DEFAULT_PROXY_TIMEOUT,
            user_agent: format!("vocalis/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the joke source URL.
    pub fn with_joke_url(mut self, joke_url: Url) -> Self {
        self.joke_url = joke_url;
        self
    }

    /// Sets the proxy request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Binds every tool contract to its handler and installs them into the
/// registry.
///
/// Token-based credentials are warmed up once here, before any request is
/// served. One search service and one proxy HTTP client are built and
/// shared across all handlers; no further registry mutation happens after
/// this returns.
pub async fn attach_tools(
    registry: &mut ToolRegistry,
    credential: Credential,
    search_config: SearchClientConfig,
    proxy_config: ProxyConfig,
) -> Result<()> {
    if credential.requires_warm_up() {
        credential.warm_up(&search_config.token_scope).await?;
    }

    let backend = HttpSearchBackend::new(search_config.clone(), credential)?;
    let service = Arc::new(SearchService::new(Arc::new(backend), search_config));

    let http = Client::builder()
        .timeout(proxy_config.timeout)
        .user_agent(&proxy_config.user_agent)
        .build()
        .map_err(crate::error::ToolError::Transport)?;

    tracing::info!(
        target: TRACING_TARGET_REGISTRY,
        base_url = %proxy_config.base_url,
        "Attaching tools"
    );

    registry.register(SearchTool::contract(), Arc::new(SearchTool::new(service.clone())))?;
    registry.register(
        GroundingTool::contract(),
        Arc::new(GroundingTool::new(service)),
    )?;

    for kind in [RecordKind::Bookings, RecordKind::Flights, RecordKind::Incidents] {
        registry.register(
            RecordLookupTool::contract(kind),
            Arc::new(RecordLookupTool::new(
                http.clone(),
                proxy_config.base_url.clone(),
                kind,
            )),
        )?;
    }

    registry.register(
        JokeTool::contract(),
        Arc::new(JokeTool::new(http, proxy_config.joke_url)),
    )?;

    Ok(())
}
