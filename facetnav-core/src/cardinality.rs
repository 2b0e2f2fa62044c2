//! Per-node cardinality lookups for navigation statistics.
//!
//! A [`CardinalitySource`] tells the navigation operations which nodes are
//! visible and how many matching items sit below them. `CardinalityTable`
//! provides O(1) lookups, either filled in directly or derived from item
//! assignments.

use crate::error::{Error, Result};
use crate::hierarchy::Hierarchy;
use crate::ids::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Validity and counts per hierarchy node.
pub trait CardinalitySource {
    /// `false` hides the node and its whole subtree.
    fn is_valid(&self, id: NodeId) -> bool;

    /// Number of matching items in the node's subtree.
    fn own_count(&self, id: NodeId) -> u64;

    /// Number of visible direct children.
    fn children_count(&self, id: NodeId) -> u64;
}

/// What to do with nodes that have no matching items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyNodeBehaviour {
    /// Keep empty nodes visible with zero counts
    #[default]
    LeaveEmpty,
    /// Hide nodes whose subtree has no items
    RemoveEmpty,
}

/// Statistics for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCardinality {
    /// Distinct items in the subtree
    pub own: u64,
    /// Visible direct children
    pub children: u64,
    /// Whether the node is shown at all
    pub valid: bool,
}

impl NodeCardinality {
    pub fn new(own: u64, children: u64) -> Self {
        Self {
            own,
            children,
            valid: true,
        }
    }

    pub fn invalid() -> Self {
        Self {
            own: 0,
            children: 0,
            valid: false,
        }
    }
}

/// Pre-built cardinality lookup.
///
/// Nodes without an entry are treated according to the table's
/// [`EmptyNodeBehaviour`]: visible with zero counts, or hidden.
#[derive(Debug, Default, Clone)]
pub struct CardinalityTable {
    entries: FxHashMap<NodeId, NodeCardinality>,
    missing: EmptyNodeBehaviour,
}

impl CardinalityTable {
    pub fn new(missing: EmptyNodeBehaviour) -> Self {
        Self {
            entries: FxHashMap::default(),
            missing,
        }
    }

    /// Derive counts from `(item, node)` assignments.
    ///
    /// An item assigned to a node counts towards that node and all of its
    /// ancestors, once per node no matter how many assignments reach it.
    /// `children` counts the direct children left visible under `behaviour`.
    pub fn from_assignments<H, I>(
        hierarchy: &H,
        assignments: I,
        behaviour: EmptyNodeBehaviour,
    ) -> Result<Self>
    where
        H: Hierarchy + ?Sized,
        I: IntoIterator<Item = (u64, NodeId)>,
    {
        let mut items: FxHashMap<NodeId, FxHashSet<u64>> = FxHashMap::default();
        for (item, node) in assignments {
            if !hierarchy.exists(node) {
                return Err(Error::node_not_found(node));
            }
            items.entry(node).or_default().insert(item);
            for ancestor in hierarchy.ancestor_chain(node) {
                items.entry(ancestor).or_default().insert(item);
            }
        }

        let own = |id: NodeId| items.get(&id).map_or(0, |set| set.len() as u64);
        let visible = |id: NodeId| behaviour == EmptyNodeBehaviour::LeaveEmpty || own(id) > 0;

        let mut table = CardinalityTable::new(behaviour);
        let mut stack: Vec<NodeId> = hierarchy.roots().to_vec();
        while let Some(id) = stack.pop() {
            let kids = hierarchy.children_of(id);
            let entry = if visible(id) {
                let children = kids.iter().filter(|&&kid| visible(kid)).count() as u64;
                NodeCardinality::new(own(id), children)
            } else {
                NodeCardinality::invalid()
            };
            table.entries.insert(id, entry);
            stack.extend_from_slice(kids);
        }

        tracing::debug!(
            nodes = table.entries.len(),
            non_empty = items.len(),
            ?behaviour,
            "derived cardinality table"
        );

        Ok(table)
    }

    /// Set the counts of `id`, marking it visible.
    pub fn insert(&mut self, id: NodeId, own: u64, children: u64) -> &mut Self {
        self.entries.insert(id, NodeCardinality::new(own, children));
        self
    }

    /// Hide `id` and its subtree.
    pub fn invalidate(&mut self, id: NodeId) -> &mut Self {
        self.entries.insert(id, NodeCardinality::invalid());
        self
    }

    /// Get the entry for `id`, if one was recorded.
    pub fn get(&self, id: NodeId) -> Option<&NodeCardinality> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CardinalitySource for CardinalityTable {
    fn is_valid(&self, id: NodeId) -> bool {
        match self.entries.get(&id) {
            Some(entry) => entry.valid,
            None => self.missing == EmptyNodeBehaviour::LeaveEmpty,
        }
    }

    fn own_count(&self, id: NodeId) -> u64 {
        self.entries.get(&id).map_or(0, |e| e.own)
    }

    fn children_count(&self, id: NodeId) -> u64 {
        self.entries.get(&id).map_or(0, |e| e.children)
    }
}
