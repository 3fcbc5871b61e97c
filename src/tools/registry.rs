//! Security tool registry.
//!
//! In-memory mapping from tool name to descriptor. Registrations live for
//! the process and are rebuilt at startup; there is no persistence.

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One external security tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique name; acts as the registry key.
    pub name: String,

    /// Opaque credential for the tool's API. Stored for operators, but no
    /// request issued by this crate attaches it.
    pub api_key: String,

    /// Base HTTP endpoint. Healthchecks hit `{base_url}/healthcheck`.
    pub base_url: String,
}

/// In-memory registry of security tools. Single-threaded use; callers that
/// share a registry across tasks must wrap it in their own lock.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. An existing descriptor under the same name is
    /// replaced (last write wins).
    pub fn add(&mut self, descriptor: ToolDescriptor) {
        self.tools.insert(descriptor.name.clone(), descriptor);
    }

    /// Remove a tool. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.tools.remove(name);
    }

    /// Get a tool descriptor by name.
    pub fn get(&self, name: &str) -> Result<&ToolDescriptor> {
        self.tools
            .get(name)
            .ok_or_else(|| Error::tool_not_found(name))
    }

    /// All descriptors, sorted by name.
    ///
    /// The map's incidental order never leaks: blame order on a failing
    /// pass and test output stay reproducible.
    pub fn descriptors(&self) -> Vec<&ToolDescriptor> {
        let mut descriptors: Vec<&ToolDescriptor> = self.tools.values().collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
