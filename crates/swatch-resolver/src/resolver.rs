//! Effective parameter resolution.

use swatch_color::{default_design_system, DesignSystemParams};
use swatch_core::{DesignSystem, NodeError};
use swatch_node::{NodeHost, PluginNode};
use tracing::debug;

/// Merges inherited and override parameters for nodes of a host tree.
#[derive(Debug, Clone)]
pub struct DesignSystemResolver {
    defaults: DesignSystem,
}

impl Default for DesignSystemResolver {
    fn default() -> Self {
        Self::new(default_design_system())
    }
}

impl DesignSystemResolver {
    /// Create a resolver rooted at the given default set.
    pub fn new(defaults: DesignSystem) -> Self {
        Self { defaults }
    }

    /// The built-in defaults with `overrides` applied on top.
    pub fn with_default_overrides(overrides: &DesignSystem) -> Self {
        Self::new(default_design_system().merged_with(overrides))
    }

    /// The root of every inheritance chain.
    pub fn defaults(&self) -> &DesignSystem {
        &self.defaults
    }

    /// Effective parameters for a node.
    pub fn effective<H: NodeHost>(&self, host: &H, id: &str) -> Result<DesignSystem, NodeError> {
        let chain = self.ancestor_chain(host, id)?;
        Ok(self.merge_chain(host, &chain))
    }

    /// What a node would resolve to with no overrides of its own: its
    /// parent's effective parameters, or the defaults at a root.
    pub fn inherited<H: NodeHost>(&self, host: &H, id: &str) -> Result<DesignSystem, NodeError> {
        let chain = self.ancestor_chain(host, id)?;
        Ok(self.merge_chain(host, &chain[1..]))
    }

    /// Typed effective parameters for a node.
    pub fn resolve<H: NodeHost>(&self, host: &H, id: &str) -> Result<DesignSystemParams, NodeError> {
        let effective = self.effective(host, id)?;
        Ok(DesignSystemParams::from_design_system(&effective))
    }

    /// Ids from `id` up to the topmost reachable ancestor, nearest first.
    fn ancestor_chain<H: NodeHost>(&self, host: &H, id: &str) -> Result<Vec<String>, NodeError> {
        let node = host.require_node(id)?;
        let mut chain = vec![node.id().to_string()];
        let mut next = node.parent().map(str::to_string);

        while let Some(parent_id) = next {
            // Check for circular parent links
            if chain.contains(&parent_id) {
                let mut cycle = chain.clone();
                cycle.push(parent_id);
                return Err(NodeError::ParentCycle { cycle });
            }

            match host.get_node(&parent_id) {
                Some(parent) => {
                    next = parent.parent().map(str::to_string);
                    chain.push(parent_id);
                }
                None => {
                    debug!(node = id, parent = %parent_id, "ancestor missing, treating as root");
                    next = None;
                }
            }
        }

        Ok(chain)
    }

    fn merge_chain<H: NodeHost>(&self, host: &H, chain: &[String]) -> DesignSystem {
        chain
            .iter()
            .rev()
            .filter_map(|id| host.get_node(id))
            .fold(self.defaults.clone(), |merged, node| {
                merged.merged_with(node.design_system_overrides())
            })
    }
}
