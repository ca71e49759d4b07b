//! HTTP request extractors with improved error handling and validation.
//!
//! This module provides custom Axum extractors that enhance the default
//! functionality with better error messages, validation, logging, and type
//! safety. All extractors are drop-in replacements for their standard Axum
//! counterparts.
//!
//! # Extractor Categories
//!
//! ## Authentication
//!
//! - [`SessionHeader`] - Session token extraction from the `Authorization` header
//! - [`SessionIdentity`] - Complete authentication state resolved via the session store
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Path`] - Path parameter extraction with detailed error context
//! - [`Query`] - Query parameter extraction with enhanced error messages
//!
//! ## Database
//!
//! - [`PgPool`] - A database connection checked out of the pool

// Authentication
pub mod auth;

// Request Data Extraction
pub mod reject;

// Database
mod pg_connection;

pub use crate::extract::auth::{SessionHeader, SessionIdentity};
pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
