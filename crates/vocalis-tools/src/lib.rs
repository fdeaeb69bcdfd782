#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod attach;
mod contract;
mod error;
mod grounding;
mod joke;
mod proxy;
mod registry;
mod result;
mod search;

pub use attach::{DEFAULT_JOKE_URL, DEFAULT_PROXY_TIMEOUT, ProxyConfig, attach_tools};
pub use contract::ToolContract;
pub use error::{Result, ToolError};
pub use grounding::{GroundingTool, build_disjunction, sanitize_keys};
pub use joke::{FALLBACK_JOKE, JokeTool};
pub use proxy::{RecordKind, RecordLookupTool};
pub use registry::{ToolHandler, ToolRegistry};
pub use result::{ToolPayload, ToolResult, ToolResultDirection};
pub use search::SearchTool;

/// Tracing target for tool invocations.
pub const TRACING_TARGET: &str = "vocalis_tools";

/// Tracing target for registry operations.
pub const TRACING_TARGET_REGISTRY: &str = "vocalis_tools::registry";
