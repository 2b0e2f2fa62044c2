//! # facetnav stats
//!
//! Hierarchy navigation statistics for "browse by category" widgets.
//!
//! Given a [`Hierarchy`](facetnav_core::Hierarchy), an optional
//! [`CardinalitySource`](facetnav_core::CardinalitySource) and a resolver
//! turning node ids into display entities, this crate produces nested
//! [`LevelInfo`] trees:
//!
//! - [`compute_children`]: the levels below a node (or below the forest root)
//! - [`compute_siblings`]: a node next to its siblings
//! - [`compute_parents`]: the breadcrumb to a node, optionally fanned out to
//!   the siblings along the way
//!
//! All three are synchronous and side-effect free; they only read through the
//! collaborators held by a [`NavigationContext`]. Nodes the cardinality source
//! marks invalid are pruned together with their subtree.
//!
//! ## Example
//!
//! ```
//! use facetnav_core::{MemoryHierarchy, NodeId};
//! use facetnav_stats::{compute_parents, NavigationContext};
//! use std::convert::Infallible;
//!
//! let hierarchy = MemoryHierarchy::from_edges([
//!     (NodeId(1), None),
//!     (NodeId(2), Some(NodeId(1))),
//!     (NodeId(4), Some(NodeId(2))),
//! ])
//! .unwrap();
//!
//! let resolve = |id: NodeId| Ok::<_, Infallible>(format!("N{}", id.as_u32()));
//! let ctx = NavigationContext::new(&hierarchy, resolve);
//! let breadcrumb = compute_parents(&ctx, NodeId(4), None).unwrap();
//!
//! assert_eq!(breadcrumb[0].entity, "N1");
//! assert_eq!(breadcrumb[0].children[0].children[0].entity, "N4");
//! ```

mod children;
mod context;
mod descendants;
pub mod error;
mod level;
mod parents;
mod siblings;

pub use children::compute_children;
pub use context::{Comparator, EntityResolver, NavigationContext, Predicate, Statistics, StopAt};
pub use descendants::build_descendants;
pub use error::{NavigationError, Result};
pub use level::LevelInfo;
pub use parents::compute_parents;
pub use siblings::compute_siblings;
