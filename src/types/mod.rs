//! Core types for toolwatch.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for HTTP, secret store, and logging

mod config;
mod errors;

pub use config::{Config, HttpConfig, ObservabilityConfig, SecretStoreConfig};
pub use errors::{Error, Result};
