//! Typed node identifier.
//!
//! `NodeId` is `#[repr(transparent)]` + `Copy`, so wrapping the raw primary key
//! costs nothing at runtime while keeping node ids apart from item ids and counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchy node identifier (u32 primary key).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
    #[inline]
    pub fn from_u32(v: u32) -> Self {
        Self(v)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
