//! Host node abstraction for the Swatch engine.
//!
//! The engine never owns design-tool nodes. It reaches them through a
//! [`NodeHost`] by id and treats a missing id as "not found". This crate
//! defines that boundary and ships [`MemoryHost`], an in-memory tree used by
//! tests and by the JSON snapshot host.

mod memory;
mod node;

pub use memory::{MemoryHost, MemoryNode, PaintedProperties};
pub use node::{default_capabilities, node_types, NodeHost, PluginNode};
