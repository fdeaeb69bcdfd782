#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod backend;
mod config;
mod error;
mod http;
mod query;
mod service;

pub use backend::{SearchBackend, SearchDocument};
pub use config::SearchClientConfig;
pub use error::{SearchError, SearchResult};
pub use http::HttpSearchBackend;
pub use query::{QueryKind, SearchQuery, VectorQuery};
pub use service::{SearchHit, SearchService, SourceRecord, TOP_HITS, VECTOR_NEIGHBORS};

/// Tracing target for search operations.
pub const TRACING_TARGET: &str = "vocalis_search";
