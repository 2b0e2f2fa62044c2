//! Expand: a node together with its siblings.

use crate::context::{EntityResolver, NavigationContext};
use crate::descendants::build_level;
use crate::error::{NavigationError, Result};
use crate::level::LevelInfo;
use facetnav_core::NodeId;

/// Levels for `of` and every node sharing its parent (the forest roots when
/// `of` is a root), in structural order, each with its visible subtree.
///
/// Counts follow the context's [`Statistics`](crate::Statistics). An invalid
/// `of` is left out while its valid siblings are still listed. A
/// [`StopAt`](crate::StopAt) on the context is measured from `of`, so
/// `Distance(0)` lists the siblings without their subtrees.
pub fn compute_siblings<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    of: NodeId,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    let span = tracing::debug_span!(
        "facetnav_siblings",
        of = of.as_u32(),
        levels = tracing::field::Empty,
    );
    let _guard = span.enter();

    let hierarchy = ctx.hierarchy();
    if !hierarchy.exists(of) {
        return Err(NavigationError::NodeNotFound(of));
    }

    let level = hierarchy.depth(of) + 1;
    let levels = build_level(
        ctx,
        hierarchy.siblings_of(of),
        level,
        ctx.level_limit(level),
        None,
    )?;
    span.record("levels", levels.len() as u64);
    Ok(levels)
}
