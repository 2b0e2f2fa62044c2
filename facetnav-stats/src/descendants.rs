//! Recursive level builder.
//!
//! Every operation funnels through [`build_level`]: filter candidates by
//! validity, resolve survivors, recurse for their subtrees and sort the level.

use crate::context::{Comparator, EntityResolver, NavigationContext};
use crate::error::Result;
use crate::level::LevelInfo;
use facetnav_core::NodeId;

/// Levels for the visible children of `parent`, each with its full subtree.
///
/// An invalid child is skipped together with everything below it. When
/// `order` is given, each level is sorted on its own; the same order is
/// applied again at every depth. A [`StopAt`](crate::StopAt) on the context
/// is measured from `parent`.
pub fn build_descendants<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    parent: NodeId,
    order: Option<Comparator<'_, R::Entity>>,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    let parent_level = ctx.hierarchy().depth(parent) + 1;
    build_level(
        ctx,
        ctx.hierarchy().children_of(parent),
        parent_level + 1,
        ctx.level_limit(parent_level),
        order,
    )
}

/// Levels for `candidates`, all sitting on `level`, in their given order
/// unless `order` sorts them. Nothing deeper than `limit` is built.
pub(crate) fn build_level<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    candidates: &[NodeId],
    level: usize,
    limit: Option<usize>,
    order: Option<Comparator<'_, R::Entity>>,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    if limit.is_some_and(|max| level > max) {
        return Ok(Vec::new());
    }

    let mut built = Vec::with_capacity(candidates.len());
    for &id in candidates {
        if !ctx.is_visible(id) {
            tracing::trace!(node = id.as_u32(), "pruned invalid node");
            continue;
        }
        let entity = ctx.resolve(id)?;
        let children = build_level(
            ctx,
            ctx.hierarchy().children_of(id),
            level + 1,
            limit,
            order,
        )?;
        built.push(ctx.level(id, entity, children));
    }
    sort_level(&mut built, order);
    Ok(built)
}

/// Stable sort of one level by entity.
pub(crate) fn sort_level<E>(level: &mut [LevelInfo<E>], order: Option<Comparator<'_, E>>) {
    if let Some(cmp) = order {
        level.sort_by(|a, b| cmp(&a.entity, &b.entity));
    }
}
