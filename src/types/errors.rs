//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for toolwatch.
///
/// Every failure surfaces immediately to the caller; nothing is retried or
/// recovered locally. The binary treats any integration error as fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of a tool name with no registration.
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Transport-level failure reaching a tool's healthcheck endpoint
    /// (connection refused, DNS failure, request timeout).
    #[error("tool {tool} is unreachable: {source}")]
    ToolUnreachable {
        tool: String,
        #[source]
        source: reqwest::Error,
    },

    /// Healthcheck response body was not decodable as `{status}` JSON.
    #[error("tool {tool} returned an invalid healthcheck response: {source}")]
    InvalidHealthResponse {
        tool: String,
        #[source]
        source: reqwest::Error,
    },

    /// Healthcheck decoded but the tool reported a non-"ok" status.
    #[error("tool {tool} is not healthy: reported status {status:?}")]
    ToolUnhealthy { tool: String, status: String },

    /// Failure constructing the secret-store client or performing the read,
    /// including non-success responses from the store itself.
    #[error("secret store error: {source}")]
    SecretStore {
        #[source]
        source: reqwest::Error,
    },

    /// Internal errors with no more specific classification.
    #[error("internal error: {0}")]
    Internal(String),
}

// Convenience constructors
impl Error {
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    pub fn unreachable(tool: impl Into<String>, source: reqwest::Error) -> Self {
        Self::ToolUnreachable {
            tool: tool.into(),
            source,
        }
    }

    pub fn invalid_health_response(tool: impl Into<String>, source: reqwest::Error) -> Self {
        Self::InvalidHealthResponse {
            tool: tool.into(),
            source,
        }
    }

    pub fn unhealthy(tool: impl Into<String>, status: impl Into<String>) -> Self {
        Self::ToolUnhealthy {
            tool: tool.into(),
            status: status.into(),
        }
    }

    pub fn secret_store(source: reqwest::Error) -> Self {
        Self::SecretStore { source }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
