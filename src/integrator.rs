//! Integration sequencing.
//!
//! A single linear pass: healthcheck every registered tool in name order,
//! then perform exactly one secret-store read. The first failure aborts the
//! remaining checks and the read — no retries, no partial aggregation.

use crate::health::HealthChecker;
use crate::secrets::{Secret, SecretStoreClient};
use crate::tools::ToolRegistry;
use crate::types::{Config, Result};

/// Logical path of the secret fetched after a clean healthcheck pass.
pub const INTEGRATION_SECRET_PATH: &str = "secret/hello";

/// Drives the healthcheck pass and the follow-up secret read.
///
/// The registry stays owned by the caller; the integrator only reads it.
#[derive(Debug, Clone)]
pub struct Integrator {
    checker: HealthChecker,
    secrets: SecretStoreClient,
}

impl Integrator {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            checker: HealthChecker::new(&config.http)?,
            secrets: SecretStoreClient::new(&config.secret_store, &config.http)?,
        })
    }

    /// Healthcheck every tool in `registry`, then read the integration
    /// secret.
    ///
    /// Tools are checked sequentially in name order. An empty registry is
    /// vacuously healthy and proceeds straight to the read.
    pub async fn integrate(&self, registry: &ToolRegistry) -> Result<Secret> {
        for tool in registry.descriptors() {
            tracing::info!(tool = %tool.name, "healthcheck_started");
            self.checker.check(tool).await?;
        }
        tracing::info!(
            tools = registry.len(),
            path = INTEGRATION_SECRET_PATH,
            "all_tools_healthy: reading integration secret"
        );
        self.secrets.read(INTEGRATION_SECRET_PATH).await
    }
}
