//! Read-only hierarchy snapshots.
//!
//! [`Hierarchy`] is the seam the navigation operations read through: a forest
//! of [`NodeId`]s with ordered children and at most one parent per node.
//! [`MemoryHierarchy`] is the in-memory implementation, built once and shared
//! cheaply afterwards.
//!
//! # Ordering
//!
//! Child order (and root order) is declaration order, never sorted. Renderers
//! rely on it to show categories the way editors arranged them.

use crate::error::{Error, Result};
use crate::ids::NodeId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// Static empty slice for missing entries
static EMPTY_IDS: &[NodeId] = &[];

/// Structural view of a forest of nodes.
///
/// Implementations must be immutable for the duration of a navigation call,
/// and parent links must be acyclic: [`ancestor_chain`](Self::ancestor_chain)
/// and every descent walk them without a bound, so a cycle never terminates.
/// [`MemoryHierarchy`] rejects cycles when it is built.
pub trait Hierarchy {
    /// Top-level nodes in structural order.
    fn roots(&self) -> &[NodeId];

    /// Direct children of `id` in structural order. Empty for leaves and for
    /// unknown nodes.
    fn children_of(&self, id: NodeId) -> &[NodeId];

    /// Parent of `id`, `None` for roots and unknown nodes.
    fn parent_of(&self, id: NodeId) -> Option<NodeId>;

    /// Whether `id` is part of the hierarchy.
    fn exists(&self, id: NodeId) -> bool;

    /// Ancestors of `id` ordered root-first, excluding `id` itself.
    fn ancestor_chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent_of(parent);
        }
        chain.reverse();
        chain
    }

    /// Number of ancestors of `id` (roots have depth 0).
    fn depth(&self, id: NodeId) -> usize {
        self.ancestor_chain(id).len()
    }

    /// Nodes sharing the parent of `id`, including `id` itself.
    fn siblings_of(&self, id: NodeId) -> &[NodeId] {
        match self.parent_of(id) {
            Some(parent) => self.children_of(parent),
            None if self.exists(id) => self.roots(),
            None => EMPTY_IDS,
        }
    }
}

/// Arc-backed hierarchy snapshot for cheap cloning.
#[derive(Clone, Debug)]
pub struct MemoryHierarchy {
    inner: Arc<MemoryHierarchyInner>,
}

#[derive(Debug)]
struct MemoryHierarchyInner {
    /// Parentless nodes in declaration order
    roots: Vec<NodeId>,
    /// Every known node -> its parent
    parents: FxHashMap<NodeId, Option<NodeId>>,
    /// Parent -> immediate children in declaration order
    children: FxHashMap<NodeId, SmallVec<[NodeId; 4]>>,
}

impl MemoryHierarchy {
    /// Start building a hierarchy.
    pub fn builder() -> MemoryHierarchyBuilder {
        MemoryHierarchyBuilder::default()
    }

    /// Build from `(node, parent)` pairs in structural order.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, Option<NodeId>)>,
    {
        let mut builder = MemoryHierarchyBuilder::default();
        for (id, parent) in edges {
            builder.add(id, parent);
        }
        builder.build()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.inner.parents.len()
    }

    /// Check if the hierarchy has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.parents.is_empty()
    }

    /// All nodes in depth-first structural order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.inner.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children_of(id).iter().rev().copied());
        }
        out
    }
}

impl Hierarchy for MemoryHierarchy {
    fn roots(&self) -> &[NodeId] {
        &self.inner.roots
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.inner
            .children
            .get(&id)
            .map(|sv| sv.as_slice())
            .unwrap_or(EMPTY_IDS)
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.inner.parents.get(&id).copied().flatten()
    }

    fn exists(&self, id: NodeId) -> bool {
        self.inner.parents.contains_key(&id)
    }
}

/// Collects node declarations and validates them into a [`MemoryHierarchy`].
///
/// Nodes may be declared in any order; children keep the relative order in
/// which they were declared.
#[derive(Debug, Default, Clone)]
pub struct MemoryHierarchyBuilder {
    nodes: Vec<(NodeId, Option<NodeId>)>,
}

impl MemoryHierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `id` with an optional parent.
    pub fn add(&mut self, id: NodeId, parent: Option<NodeId>) -> &mut Self {
        self.nodes.push((id, parent));
        self
    }

    /// Declare a top-level node.
    pub fn add_root(&mut self, id: NodeId) -> &mut Self {
        self.add(id, None)
    }

    /// Declare `id` as the next child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, id: NodeId) -> &mut Self {
        self.add(id, Some(parent))
    }

    /// Validate declarations and freeze them into a snapshot.
    ///
    /// Fails on duplicate ids, parents that are never declared, and parent
    /// links that form a cycle.
    pub fn build(&self) -> Result<MemoryHierarchy> {
        let mut parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
        parents.reserve(self.nodes.len());
        for &(id, parent) in &self.nodes {
            if parents.insert(id, parent).is_some() {
                return Err(Error::DuplicateNode(id));
            }
        }

        let mut roots = Vec::new();
        let mut children: FxHashMap<NodeId, SmallVec<[NodeId; 4]>> = FxHashMap::default();
        for &(id, parent) in &self.nodes {
            match parent {
                None => roots.push(id),
                Some(parent) if !parents.contains_key(&parent) => {
                    return Err(Error::unknown_parent(id, parent));
                }
                Some(parent) => children.entry(parent).or_default().push(id),
            }
        }

        // Everything must hang off a root; anything else sits on a parent cycle.
        let mut reachable = 0usize;
        let mut stack: Vec<NodeId> = roots.clone();
        while let Some(id) = stack.pop() {
            reachable += 1;
            if let Some(kids) = children.get(&id) {
                stack.extend(kids.iter().copied());
            }
        }
        if reachable != parents.len() {
            let mut on_root_path: FxHashMap<NodeId, bool> = FxHashMap::default();
            for &(id, _) in &self.nodes {
                if !reaches_root(id, &parents, &mut on_root_path) {
                    return Err(Error::Cycle(id));
                }
            }
        }

        tracing::debug!(nodes = parents.len(), roots = roots.len(), "built memory hierarchy");

        Ok(MemoryHierarchy {
            inner: Arc::new(MemoryHierarchyInner {
                roots,
                parents,
                children,
            }),
        })
    }
}

/// Walk parent links from `start`, memoizing which nodes lead to a root.
fn reaches_root(
    start: NodeId,
    parents: &FxHashMap<NodeId, Option<NodeId>>,
    memo: &mut FxHashMap<NodeId, bool>,
) -> bool {
    let mut path = Vec::new();
    let mut current = start;
    let verdict = loop {
        if let Some(&known) = memo.get(&current) {
            break known;
        }
        if path.contains(&current) {
            break false;
        }
        path.push(current);
        match parents.get(&current).copied().flatten() {
            Some(parent) => current = parent,
            None => break true,
        }
    };
    for id in path {
        memo.insert(id, verdict);
    }
    verdict
}
