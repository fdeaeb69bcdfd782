//! Credentials for authenticating against the knowledge index.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::TRACING_TARGET_CREDENTIAL;

/// Provider of scoped access tokens.
///
/// Implementations are expected to cache tokens internally; callers may
/// request a token on every request without incurring a round trip each time.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns an access token valid for the given scope.
    async fn access_token(&self, scope: &str) -> Result<String>;
}

/// Credential for the knowledge index, either a static API key or a
/// token-based identity.
///
/// Only the token case needs a warm-up step: the first token fetch can be
/// slow, so [`Credential::warm_up`] pre-fetches it before any request is
/// served rather than paying that latency inside the hot request path.
#[derive(Clone)]
pub enum Credential {
    /// Static API key, sent as-is with every request.
    ApiKey(String),
    /// Token-based identity that exchanges itself for scoped access tokens.
    Token(Arc<dyn TokenProvider>),
}

impl Credential {
    /// Creates a static API key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Creates a token-based credential.
    pub fn token(provider: impl TokenProvider + 'static) -> Self {
        Self::Token(Arc::new(provider))
    }

    /// Returns true if this credential requires a warm-up step.
    pub fn requires_warm_up(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Eagerly acquires a scoped access token for token-based credentials.
    ///
    /// A no-op for static API keys.
    pub async fn warm_up(&self, scope: &str) -> Result<()> {
        let Self::Token(provider) = self else {
            return Ok(());
        };

        provider.access_token(scope).await?;
        tracing::debug!(
            target: TRACING_TARGET_CREDENTIAL,
            scope = %scope,
            "Access token warmed up"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
            Self::Token(_) => f.debug_tuple("Token").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TokenProvider for CountingProvider {
        async fn access_token(&self, _scope: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("token".into())
        }
    }

    #[tokio::test]
    async fn test_api_key_warm_up_is_noop() {
        let credential = Credential::api_key("secret");
        assert!(!credential.requires_warm_up());
        credential.warm_up("search").await.unwrap();
    }

    #[tokio::test]
    async fn test_token_warm_up_fetches_once() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let credential = Credential::Token(provider.clone());
        assert!(credential.requires_warm_up());
        credential.warm_up("search").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credential = Credential::api_key("secret");
        assert!(!format!("{credential:?}").contains("secret"));
    }
}
