//! Desired-state graph - declaration records plus explicit ordering edges

use crate::error::{Error, Result};
use crate::types::{BuildSummary, Node, NodeId};
use serde::Serialize;
use std::collections::HashSet;

/// An append-only graph of resource declarations
///
/// Nodes are stored in declaration order, which is also a valid topological
/// order: `insert` rejects any node whose dependency edges point at nodes
/// not yet present, so forward references cannot exist.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    #[serde(skip)]
    ids: HashSet<NodeId>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, enforcing the graph invariants
    ///
    /// Fails if a node with the same id already exists, or if any entry in
    /// `depends_on` has not been declared yet.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.ids.contains(&node.id) {
            return Err(Error::Duplicate(node.id));
        }

        for dep in &node.depends_on {
            if !self.ids.contains(dep) {
                return Err(Error::UnknownDependency {
                    id: node.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }

        self.ids.insert(node.id.clone());
        self.nodes.push(node);
        Ok(())
    }

    /// Look up a node by id
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Whether a node with this id has been declared
    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    /// Nodes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no declarations
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of explicit dependency edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.depends_on.len()).sum()
    }

    /// Summary of the graph's contents
    pub fn summary(&self) -> BuildSummary {
        BuildSummary {
            resources: self.len(),
            edges: self.edge_count(),
        }
    }
}
