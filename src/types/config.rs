//! Configuration structures.
//!
//! Defaults are usable as-is; the secret-store section additionally honors
//! the conventional `VAULT_ADDR` / `VAULT_TOKEN` environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global toolwatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Outbound HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Secret-store configuration.
    #[serde(default)]
    pub secret_store: SecretStoreConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Defaults with environment overrides applied.
    ///
    /// `VAULT_ADDR` replaces the store address and `VAULT_TOKEN` supplies
    /// the client token, mirroring the store's own client conventions.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("VAULT_ADDR") {
            if !addr.is_empty() {
                config.secret_store.address = addr;
            }
        }
        if let Ok(token) = std::env::var("VAULT_TOKEN") {
            if !token.is_empty() {
                config.secret_store.token = Some(token);
            }
        }
        config
    }
}

/// Outbound HTTP client configuration.
///
/// Applies to healthcheck requests and secret-store reads alike. The
/// request timeout bounds the whole call so an unresponsive tool cannot
/// hang the integration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// TCP connect timeout.
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(3),
        }
    }
}

/// Secret-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretStoreConfig {
    /// Store base address.
    pub address: String,

    /// Client token forwarded as `X-Vault-Token` when present. The store
    /// owns the auth handshake; the token is never inspected here.
    pub token: Option<String>,
}

impl Default for SecretStoreConfig {
    fn default() -> Self {
        Self {
            address: "https://vault.example.com:8200".to_string(),
            token: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_are_finite() {
        let config = HttpConfig::default();
        assert!(config.request_timeout > Duration::ZERO);
        assert!(config.connect_timeout > Duration::ZERO);
    }

    #[test]
    fn default_store_has_no_token() {
        let config = SecretStoreConfig::default();
        assert_eq!(config.address, "https://vault.example.com:8200");
        assert!(config.token.is_none());
    }
}
