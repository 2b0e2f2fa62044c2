//! # facetnav core
//!
//! Collaborator types for hierarchy navigation statistics.
//!
//! This crate provides:
//! - [`NodeId`]: typed hierarchy node identifier
//! - [`Hierarchy`]: read-only forest view, with the in-memory [`MemoryHierarchy`]
//! - [`CardinalitySource`]: per-node validity and counts, with [`CardinalityTable`]
//! - [`Snapshot`]: JSON documents bundling both
//!
//! The navigation operations themselves live in `facetnav-stats`; nothing here
//! knows about display entities.
//!
//! ## Example
//!
//! ```
//! use facetnav_core::{CardinalityTable, EmptyNodeBehaviour, Hierarchy, MemoryHierarchy, NodeId};
//!
//! let mut builder = MemoryHierarchy::builder();
//! builder.add_root(NodeId(1)).add_child(NodeId(1), NodeId(2));
//! let hierarchy = builder.build().unwrap();
//!
//! let counts = CardinalityTable::from_assignments(
//!     &hierarchy,
//!     [(100, NodeId(2))],
//!     EmptyNodeBehaviour::RemoveEmpty,
//! )
//! .unwrap();
//! assert_eq!(hierarchy.children_of(NodeId(1)), &[NodeId(2)]);
//! assert_eq!(counts.get(NodeId(1)).map(|c| c.own), Some(1));
//! ```

pub mod cardinality;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod snapshot;

// Re-export main types
pub use cardinality::{CardinalitySource, CardinalityTable, EmptyNodeBehaviour, NodeCardinality};
pub use error::{Error, Result};
pub use hierarchy::{Hierarchy, MemoryHierarchy, MemoryHierarchyBuilder};
pub use ids::NodeId;
pub use snapshot::{Snapshot, SnapshotAssignment, SnapshotCount, SnapshotNode};
