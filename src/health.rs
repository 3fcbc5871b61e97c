//! Tool healthchecks over HTTP.
//!
//! One `GET {base_url}/healthcheck` per tool, decoded as `{status}` JSON.
//! Anything other than the literal status `"ok"` is unhealthy. No auth
//! headers are sent; the descriptor's API key stays unused.

use crate::tools::ToolDescriptor;
use crate::types::{Error, HttpConfig, Result};
use serde::Deserialize;

/// Status literal every healthy tool must report.
const STATUS_OK: &str = "ok";

/// Wire form of a tool's healthcheck reply. Transient; never stored.
#[derive(Debug, Deserialize)]
struct HealthcheckResponse {
    status: String,
}

/// Issues healthcheck requests against registered tools.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    client: reqwest::Client,
}

impl HealthChecker {
    /// Build a checker with the configured timeouts. The request timeout
    /// bounds the whole call so a stalled tool cannot hang the pass.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::internal(format!("http client construction failed: {e}")))?;
        Ok(Self { client })
    }

    /// Check a single tool. `Ok(())` means the tool reported `"ok"`.
    ///
    /// The response body is fully consumed by the decode on every path, so
    /// the connection is released whether the check passes or fails.
    pub async fn check(&self, tool: &ToolDescriptor) -> Result<()> {
        let url = format!("{}/healthcheck", tool.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::unreachable(&tool.name, e))?;

        // The status code is not gated separately: a decodable body is
        // judged on its `status` field, anything else fails the decode.
        let health: HealthcheckResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_health_response(&tool.name, e))?;

        if health.status != STATUS_OK {
            return Err(Error::unhealthy(&tool.name, health.status));
        }

        tracing::debug!(tool = %tool.name, "healthcheck_passed");
        Ok(())
    }
}
