//! Error types for facetnav-stats

use facetnav_core::NodeId;
use thiserror::Error;

/// Result type alias, generic over the resolver's error type
pub type Result<T, X> = std::result::Result<T, NavigationError<X>>;

/// Navigation failure.
///
/// Invalid nodes are not errors; they are simply left out of the result.
#[derive(Error, Debug)]
pub enum NavigationError<X> {
    /// The node the caller navigates from is not in the hierarchy
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The entity resolver failed; the resolver's error is kept as-is
    #[error("Entity resolution failed: {0}")]
    Resolve(#[source] X),
}

impl<X> NavigationError<X> {
    /// Node id of a `NodeNotFound` error.
    pub fn missing_node(&self) -> Option<NodeId> {
        match self {
            NavigationError::NodeNotFound(id) => Some(*id),
            NavigationError::Resolve(_) => None,
        }
    }

    /// Unwrap the resolver error, if that is what failed.
    pub fn into_resolve_error(self) -> Option<X> {
        match self {
            NavigationError::Resolve(e) => Some(e),
            NavigationError::NodeNotFound(_) => None,
        }
    }
}
