//! Error types for graph construction and engine hand-off

use crate::types::NodeId;
use thiserror::Error;

/// Errors that can occur while declaring resources or submitting the graph
///
/// There is exactly one failure policy: the first error aborts the build and
/// propagates to the caller unchanged. The variants exist for diagnostics,
/// not for recovery.
#[derive(Error, Debug)]
pub enum Error {
    /// A declaration's attributes failed validation
    #[error("invalid declaration {id}: {reason}")]
    Validation { id: NodeId, reason: anyhow::Error },

    /// A declaration with the same kind and name already exists in the graph
    #[error("duplicate declaration: {0}")]
    Duplicate(NodeId),

    /// A dependency edge points at a node that has not been declared yet
    #[error("declaration {id} depends on undeclared {dependency}")]
    UnknownDependency { id: NodeId, dependency: NodeId },

    /// A declaration embeds an identifier no prior declaration produced
    #[error("declaration {id} references unknown identifier \"{reference}\"")]
    UnknownReference { id: NodeId, reference: String },

    /// The engine refused to accept a declaration
    #[error("engine rejected {id}: {reason}")]
    Rejected { id: NodeId, reason: anyhow::Error },

    /// The engine failed to accept the completed graph
    #[error("graph submission failed: {0}")]
    Submit(anyhow::Error),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, Error>;
