//! Core types for desired-state graphs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a node within a graph
///
/// A node is addressed by its resource kind plus a logical name unique
/// within that kind, rendered as `kind.name` (e.g. `realm.demorealm`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Resource kind tag (e.g. "realm", "openid_client")
    pub kind: String,
    /// Logical name of the declaration
    pub name: String,
}

impl NodeId {
    /// Create a node id from a kind and a logical name
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.name)
    }
}

/// A single declaration record in the desired-state graph
///
/// Nodes are immutable once inserted: the attribute record and dependency
/// list describe desired state only. Reconciliation against live state is
/// the apply engine's job, so a node carries no current-state information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Graph identity of this declaration
    pub id: NodeId,
    /// Human-readable summary of what the declaration describes
    pub description: String,
    /// Serialized desired-state attributes consumed by the engine
    pub attrs: serde_json::Value,
    /// Explicit ordering edges: nodes that must be declared before this one
    pub depends_on: Vec<NodeId>,
}

/// Summary of a completed graph hand-off
///
/// This is everything the program can observe about its own output; apply
/// results (created/modified/removed counts) belong to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Number of declarations in the graph
    pub resources: usize,
    /// Number of explicit dependency edges
    pub edges: usize,
}
