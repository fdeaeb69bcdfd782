#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod data;
mod handler;

pub use data::{Incident, incidents};
pub use handler::router;

/// Tracing target for record handlers.
pub const TRACING_TARGET: &str = "vocalis_records";
