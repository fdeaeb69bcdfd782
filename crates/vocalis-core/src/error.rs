//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Used as the source slot of [`Error`], wrapping whatever a credential
/// provider failed with while keeping Send and Sync bounds.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a credential provider can fail.
///
/// This is the error channel of [`crate::TokenProvider`]: a token exchange
/// either gets rejected, never reaches the identity service, or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The identity service rejected the credential.
    Authentication,
    /// The identity service could not be reached.
    NetworkError,
    /// The token exchange timed out.
    Timeout,
}

/// A structured credential error: kind, optional message, optional source.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new authentication error.
    pub fn authentication() -> Self {
        Self::new(ErrorKind::Authentication)
    }

    /// Creates a new network error.
    pub fn network_error() -> Self {
        Self::new(ErrorKind::NetworkError)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let error = Error::authentication().with_message("token rejected");
        assert_eq!(error.to_string(), "Authentication: token rejected");
    }

    #[test]
    fn test_every_kind_has_a_constructor() {
        assert_eq!(Error::authentication().kind(), ErrorKind::Authentication);
        assert_eq!(Error::network_error().kind(), ErrorKind::NetworkError);
        assert_eq!(Error::timeout().kind(), ErrorKind::Timeout);
    }

    #[test]
    fn test_error_kind_str() {
        assert_eq!(Error::authentication().kind_str(), "authentication");
        assert_eq!(Error::network_error().kind_str(), "network_error");
        assert_eq!(Error::timeout().kind_str(), "timeout");
    }

    #[test]
    fn test_source_is_preserved() {
        let source = std::io::Error::other("connection reset");
        let error = Error::network_error().with_source(source);
        assert!(std::error::Error::source(&error).is_some());
    }
}
