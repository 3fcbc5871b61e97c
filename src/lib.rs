//! # Toolwatch - Security Tool Health Aggregator
//!
//! Minimal registry of named external security tools plus an integration
//! routine that verifies every tool is healthy before reading one secret
//! from an external store:
//! - In-memory tool registry (add, remove, get; no persistence)
//! - Sequential HTTP healthchecks with a configurable request timeout
//! - Fail-fast error propagation — the first failing tool aborts the pass
//! - Single read-only lookup against a Vault-style secret store
//!
//! ## Control flow
//!
//! ```text
//!   populate registry → check(tool_1) → … → check(tool_n) → read secret → report
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod health;
pub mod integrator;
pub mod secrets;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
