//! Collaborators shared by every navigation operation.

use crate::error::{NavigationError, Result};
use crate::level::LevelInfo;
use facetnav_core::{CardinalitySource, Hierarchy, NodeId};
use std::cmp::Ordering;

/// Caller-supplied total order over resolved entities.
pub type Comparator<'f, E> = &'f dyn Fn(&E, &E) -> Ordering;

/// Caller-supplied test over resolved entities.
pub type Predicate<'f, E> = &'f dyn Fn(&E) -> bool;

/// Maps a node id to the entity shown for it.
///
/// Implemented for every `Fn(NodeId) -> Result<E, X>` closure. Errors are
/// handed back to the caller untouched inside [`NavigationError::Resolve`].
pub trait EntityResolver {
    type Entity;
    type Error;

    fn resolve(&self, id: NodeId) -> std::result::Result<Self::Entity, Self::Error>;
}

impl<F, E, X> EntityResolver for F
where
    F: Fn(NodeId) -> std::result::Result<E, X>,
{
    type Entity = E;
    type Error = X;

    fn resolve(&self, id: NodeId) -> std::result::Result<E, X> {
        self(id)
    }
}

/// Which counts to attach to each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Attach the node's own item count
    pub cardinality: bool,
    /// Attach the number of visible direct children
    pub children_count: bool,
}

impl Statistics {
    pub fn all() -> Self {
        Self {
            cardinality: true,
            children_count: true,
        }
    }

    pub fn none() -> Self {
        Self {
            cardinality: false,
            children_count: false,
        }
    }

    pub fn cardinality_only() -> Self {
        Self {
            cardinality: true,
            children_count: false,
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::all()
    }
}

/// Depth bound for a traversal.
///
/// Levels count from the forest roots, which sit on level 1; the virtual
/// node above them is level 0. Distances count levels away from the node a
/// traversal pivots on, which is itself at distance 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAt {
    /// Absolute level
    Level(u32),
    /// Levels away from the pivot
    Distance(u32),
}

impl StopAt {
    /// Deepest level a descent from a pivot on `pivot_level` may include.
    pub fn max_level(self, pivot_level: usize) -> usize {
        match self {
            StopAt::Level(level) => level as usize,
            StopAt::Distance(distance) => pivot_level + distance as usize,
        }
    }

    /// Shallowest level an ascent from a pivot on `pivot_level` may include.
    pub fn min_level(self, pivot_level: usize) -> usize {
        match self {
            StopAt::Level(level) => level as usize,
            StopAt::Distance(distance) => pivot_level.saturating_sub(distance as usize),
        }
    }
}

/// Hierarchy, counts, resolver and flags for one navigation call.
///
/// Borrowed snapshots must stay unchanged while an operation runs.
pub struct NavigationContext<'a, R> {
    hierarchy: &'a dyn Hierarchy,
    cardinalities: Option<&'a dyn CardinalitySource>,
    resolver: R,
    statistics: Statistics,
    requested: Option<NodeId>,
    stop_at: Option<StopAt>,
}

impl<'a, R: EntityResolver> NavigationContext<'a, R> {
    /// Context without a cardinality source: every node is visible and no
    /// counts are attached.
    pub fn new(hierarchy: &'a dyn Hierarchy, resolver: R) -> Self {
        Self {
            hierarchy,
            cardinalities: None,
            resolver,
            statistics: Statistics::default(),
            requested: None,
            stop_at: None,
        }
    }

    pub fn with_cardinalities(mut self, source: &'a dyn CardinalitySource) -> Self {
        self.cardinalities = Some(source);
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// Flag the level of `id` as the requested one.
    pub fn with_requested(mut self, id: NodeId) -> Self {
        self.requested = Some(id);
        self
    }

    /// Bound traversals by `stop_at`; see each operation for its pivot.
    pub fn with_stop_at(mut self, stop_at: StopAt) -> Self {
        self.stop_at = Some(stop_at);
        self
    }

    pub fn hierarchy(&self) -> &'a dyn Hierarchy {
        self.hierarchy
    }

    pub fn cardinalities(&self) -> Option<&'a dyn CardinalitySource> {
        self.cardinalities
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn requested(&self) -> Option<NodeId> {
        self.requested
    }

    pub fn stop_at(&self) -> Option<StopAt> {
        self.stop_at
    }

    /// Deepest level a descent from `pivot_level` may reach, if bounded.
    pub(crate) fn level_limit(&self, pivot_level: usize) -> Option<usize> {
        self.stop_at.map(|stop| stop.max_level(pivot_level))
    }

    pub(crate) fn is_visible(&self, id: NodeId) -> bool {
        self.cardinalities.map_or(true, |source| source.is_valid(id))
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Result<R::Entity, R::Error> {
        self.resolver.resolve(id).map_err(NavigationError::Resolve)
    }

    /// Assemble the level for `id`, attaching the requested counts.
    pub(crate) fn level(
        &self,
        id: NodeId,
        entity: R::Entity,
        children: Vec<LevelInfo<R::Entity>>,
    ) -> LevelInfo<R::Entity> {
        let stats = self.statistics;
        LevelInfo {
            entity,
            requested: self.requested == Some(id),
            cardinality: self
                .cardinalities
                .filter(|_| stats.cardinality)
                .map(|source| source.own_count(id)),
            children_count: self
                .cardinalities
                .filter(|_| stats.children_count)
                .map(|source| source.children_count(id)),
            children,
        }
    }
}
