//! Tool infrastructure — descriptors and the in-memory registry.

pub mod registry;

pub use registry::{ToolDescriptor, ToolRegistry};
