#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod extract;
pub mod handler;
pub mod service;

/// Tracing target for authentication operations.
pub const TRACING_TARGET_AUTHENTICATION: &str = "ladle_server::authentication";

pub use crate::handler::{Error, ErrorKind, Result};
