//! Descend: levels below a node, or below the forest root.

use crate::context::{Comparator, EntityResolver, NavigationContext};
use crate::descendants::build_level;
use crate::error::{NavigationError, Result};
use crate::level::LevelInfo;
use facetnav_core::NodeId;

/// Levels under `start`, each with its full visible subtree.
///
/// - `start == None`: one level per forest root.
/// - `exclude_start`: one level per child of `start`.
/// - otherwise: a single level for `start` itself, carrying its subtree.
///
/// A [`StopAt`](crate::StopAt) on the context is measured from `start`, or
/// from the virtual level 0 above the roots when `start` is `None`.
///
/// Fails with `NodeNotFound` when `start` is not in the hierarchy. An
/// invalid `start` yields an empty result.
pub fn compute_children<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    start: Option<NodeId>,
    exclude_start: bool,
    order: Option<Comparator<'_, R::Entity>>,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    let span = tracing::debug_span!(
        "facetnav_children",
        start = start.map(NodeId::as_u32),
        exclude_start,
        ordered = order.is_some(),
        levels = tracing::field::Empty,
    );
    let _guard = span.enter();

    let hierarchy = ctx.hierarchy();
    let pivot_level = match start {
        None => 0,
        Some(id) if !hierarchy.exists(id) => return Err(NavigationError::NodeNotFound(id)),
        Some(id) => hierarchy.depth(id) + 1,
    };
    let (candidates, level): (&[NodeId], usize) = match &start {
        None => (hierarchy.roots(), 1),
        Some(id) if exclude_start => (hierarchy.children_of(*id), pivot_level + 1),
        Some(id) => (std::slice::from_ref(id), pivot_level),
    };

    let levels = build_level(ctx, candidates, level, ctx.level_limit(pivot_level), order)?;
    span.record("levels", levels.len() as u64);
    Ok(levels)
}
