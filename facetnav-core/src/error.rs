//! Error types for facetnav-core

use crate::ids::NodeId;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Node is not part of the hierarchy
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Node declared twice while building a hierarchy
    #[error("Duplicate node: {0}")]
    DuplicateNode(NodeId),

    /// Node references a parent that is never declared
    #[error("Node {node} references unknown parent {parent}")]
    UnknownParent { node: NodeId, parent: NodeId },

    /// Node is its own ancestor
    #[error("Cycle detected at node {0}")]
    Cycle(NodeId),

    /// Snapshot document is structurally valid JSON but semantically wrong
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// JSON parsing error (serde_json)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a node not found error
    pub fn node_not_found(id: NodeId) -> Self {
        Error::NodeNotFound(id)
    }

    /// Create an unknown parent error
    pub fn unknown_parent(node: NodeId, parent: NodeId) -> Self {
        Error::UnknownParent { node, parent }
    }

    /// Create an invalid snapshot error
    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        Error::InvalidSnapshot(msg.into())
    }
}
