//! Secret-store reads over the Vault HTTP API.
//!
//! One logical read per call: `GET {address}/v1/{path}`. The store owns the
//! auth handshake; a configured token is forwarded as `X-Vault-Token` and
//! never inspected here. Secrets are returned to the caller as-is — not
//! cached, not persisted, not interpreted.

use crate::types::{Error, HttpConfig, Result, SecretStoreConfig};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Header the store expects the client token in.
const TOKEN_HEADER: &str = "X-Vault-Token";

/// One secret as returned by a logical read.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    /// Non-fatal notices from the store. The store emits `null` when there
    /// are none.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    /// Secret payload, opaque to this crate.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Secret {
    /// Warnings as a slice, treating `null` and absent alike.
    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or(&[])
    }
}

/// Read-only client for one secret store.
#[derive(Debug, Clone)]
pub struct SecretStoreClient {
    client: reqwest::Client,
    address: String,
    token: Option<String>,
}

impl SecretStoreClient {
    /// Build a client for the configured store address.
    pub fn new(config: &SecretStoreConfig, http: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(http.request_timeout)
            .connect_timeout(http.connect_timeout)
            .build()
            .map_err(Error::secret_store)?;

        Ok(Self {
            client,
            address: config.address.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Read the secret at a logical `path` (e.g. `secret/hello`).
    ///
    /// Unlike healthchecks, a non-success status from the store is an error:
    /// the store reports failures as JSON bodies that would otherwise decode.
    pub async fn read(&self, path: &str) -> Result<Secret> {
        let url = format!("{}/v1/{}", self.address, path);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::secret_store)?;

        response.json().await.map_err(Error::secret_store)
    }
}

// =============================================================================
// Tests
// =============================================================================
