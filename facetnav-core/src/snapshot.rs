//! JSON snapshot documents.
//!
//! A snapshot carries a hierarchy plus, optionally, either explicit per-node
//! counts or raw item assignments to derive them from:
//!
//! ```json
//! {
//!   "nodes": [{"id": 1, "label": "Electronics"}, {"id": 2, "parent": 1}],
//!   "assignments": [{"item": 100, "node": 2}]
//! }
//! ```

use crate::cardinality::{CardinalityTable, EmptyNodeBehaviour};
use crate::error::{Error, Result};
use crate::hierarchy::{Hierarchy, MemoryHierarchy};
use crate::ids::NodeId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Nodes in structural order
    pub nodes: Vec<SnapshotNode>,

    /// Explicit counts (mutually exclusive with `assignments`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<SnapshotCount>>,

    /// Item -> node assignments to derive counts from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<SnapshotAssignment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCount {
    pub id: NodeId,
    pub own: u64,
    #[serde(default)]
    pub children: u64,
    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapshotAssignment {
    pub item: u64,
    pub node: NodeId,
}

impl Snapshot {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build the hierarchy described by `nodes`.
    pub fn hierarchy(&self) -> Result<MemoryHierarchy> {
        MemoryHierarchy::from_edges(self.nodes.iter().map(|n| (n.id, n.parent)))
    }

    /// Node labels, for nodes that have one.
    pub fn labels(&self) -> FxHashMap<NodeId, String> {
        self.nodes
            .iter()
            .filter_map(|n| n.label.clone().map(|label| (n.id, label)))
            .collect()
    }

    /// Cardinality source described by the snapshot, if any.
    ///
    /// `behaviour` decides how nodes without explicit counts (or without any
    /// assigned items) are treated.
    pub fn cardinalities(
        &self,
        hierarchy: &MemoryHierarchy,
        behaviour: EmptyNodeBehaviour,
    ) -> Result<Option<CardinalityTable>> {
        match (&self.counts, &self.assignments) {
            (Some(_), Some(_)) => Err(Error::invalid_snapshot(
                "`counts` and `assignments` are mutually exclusive",
            )),
            (Some(counts), None) => {
                let mut table = CardinalityTable::new(behaviour);
                for count in counts {
                    if !hierarchy.exists(count.id) {
                        return Err(Error::node_not_found(count.id));
                    }
                    if count.valid {
                        table.insert(count.id, count.own, count.children);
                    } else {
                        table.invalidate(count.id);
                    }
                }
                Ok(Some(table))
            }
            (None, Some(assignments)) => CardinalityTable::from_assignments(
                hierarchy,
                assignments.iter().map(|a| (a.item, a.node)),
                behaviour,
            )
            .map(Some),
            (None, None) => Ok(None),
        }
    }
}
