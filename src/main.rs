//! Toolwatch binary - main entry point.
//!
//! Registers the known security tools, runs one integration pass, and
//! prints the retrieved secret's warnings and data. Any failure is fatal:
//! the error is reported and the process exits non-zero.

use toolwatch::integrator::Integrator;
use toolwatch::secrets::Secret;
use toolwatch::tools::{ToolDescriptor, ToolRegistry};
use toolwatch::{Config, Result};

#[tokio::main]
async fn main() {
    // Initialize observability
    toolwatch::observability::init_tracing();

    // Load configuration (defaults + VAULT_ADDR / VAULT_TOKEN overrides)
    let config = Config::from_env();

    // Populate the registry
    let mut registry = ToolRegistry::new();
    registry.add(ToolDescriptor {
        name: "Tool1".to_string(),
        api_key: "api-key-1".to_string(),
        base_url: "https://tool1.example.com".to_string(),
    });
    registry.add(ToolDescriptor {
        name: "Tool2".to_string(),
        api_key: "api-key-2".to_string(),
        base_url: "https://tool2.example.com".to_string(),
    });

    tracing::info!(tools = registry.len(), "toolwatch integration starting");

    match run(&config, &registry).await {
        Ok(secret) => {
            println!("{:?}", secret.warnings());
            println!("{}", serde_json::Value::Object(secret.data));
        }
        Err(err) => {
            tracing::error!("integration_failed: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(config: &Config, registry: &ToolRegistry) -> Result<Secret> {
    let integrator = Integrator::new(config)?;
    integrator.integrate(registry).await
}
