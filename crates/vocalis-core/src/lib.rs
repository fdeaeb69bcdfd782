#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod credential;
mod error;

pub use credential::{Credential, TokenProvider};
pub use error::{BoxedError, Error, ErrorKind, Result};

/// Tracing target for credential operations.
pub const TRACING_TARGET_CREDENTIAL: &str = "vocalis_core::credential";
