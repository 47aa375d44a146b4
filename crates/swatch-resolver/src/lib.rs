//! Design-system resolution for Swatch nodes.
//!
//! A node's effective parameters are the process-wide defaults, overlaid by
//! the override layer of every ancestor from the root down, overlaid by the
//! node's own overrides.

mod resolver;

pub use resolver::DesignSystemResolver;
