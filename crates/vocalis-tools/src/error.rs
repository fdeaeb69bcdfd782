//! Tool invocation error types.

use thiserror::Error;
use vocalis_search::SearchError;

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors surfaced at the tool-invocation boundary.
///
/// Upstream failures are propagated unmodified rather than converted into
/// soft empty results; the agent must be told a tool call failed instead of
/// being handed fabricated data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Caller-supplied arguments do not satisfy the tool's parameter schema.
    #[error("arguments rejected by schema: {0}")]
    Schema(String),

    /// A tool with this name is already registered.
    #[error("duplicate tool name: {0}")]
    DuplicateTool(&'static str),

    /// No tool is registered under this name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// An external record service answered with a non-success status.
    #[error("upstream service returned status {status}")]
    Upstream {
        /// HTTP status code returned by the record service.
        status: u16,
    },

    /// The knowledge index failed.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// Transport-level failure talking to a record service.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credential warm-up or resolution failed.
    #[error("credential error: {0}")]
    Credential(#[from] vocalis_core::Error),
}

impl ToolError {
    /// Creates a schema violation error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Creates an upstream error from a status code.
    pub fn upstream(status: u16) -> Self {
        Self::Upstream { status }
    }
}
