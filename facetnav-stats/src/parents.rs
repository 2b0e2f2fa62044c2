//! Ascend: breadcrumb from the roots down to a node, optionally fanned out
//! to the siblings of every node on the path.
//!
//! The result is built bottom-up. The level for the node itself has no
//! children; each step up wraps the level built so far inside its parent.
//! With a sibling filter, the path level is moved into its place among the
//! filtered siblings, so every path node is resolved exactly once.

use crate::context::{EntityResolver, NavigationContext, Predicate};
use crate::descendants::build_level;
use crate::error::{NavigationError, Result};
use crate::level::LevelInfo;
use facetnav_core::NodeId;

/// Roots-level sequence containing the breadcrumb to `of`.
///
/// Without `sibling_filter` every level holds exactly one entry. With it,
/// each level holds the path node plus those of its valid siblings whose
/// entity passes the filter, each sibling with its full visible subtree.
/// Path nodes are never filtered.
///
/// An invalid node on the path is pruned like anywhere else: the breadcrumb
/// ends at its parent, which under fan-out still lists its other siblings.
///
/// A [`StopAt`](crate::StopAt) on the context bounds the ascent: ancestors
/// above the stop level are left out and the result starts at the shallowest
/// one kept. `of` itself is always kept.
pub fn compute_parents<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    of: NodeId,
    sibling_filter: Option<Predicate<'_, R::Entity>>,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    let span = tracing::debug_span!(
        "facetnav_parents",
        of = of.as_u32(),
        fan_out = sibling_filter.is_some(),
        depth = tracing::field::Empty,
    );
    let _guard = span.enter();

    let hierarchy = ctx.hierarchy();
    if !hierarchy.exists(of) {
        return Err(NavigationError::NodeNotFound(of));
    }

    // Root-first path ending in `of`; the node at index i sits on level i + 1.
    let mut path = hierarchy.ancestor_chain(of);
    path.push(of);
    let bottom = path.len() - 1;
    span.record("depth", bottom as u64);

    let top = ctx
        .stop_at()
        .map_or(0, |stop| stop.min_level(path.len()).saturating_sub(1))
        .min(bottom);

    let (mut path_index, mut path_level) = match path.iter().position(|&id| !ctx.is_visible(id)) {
        Some(cut) if cut < top => {
            tracing::trace!(node = path[cut].as_u32(), "breadcrumb hidden by invalid ancestor");
            return Ok(Vec::new());
        }
        Some(cut) => {
            tracing::trace!(node = path[cut].as_u32(), "breadcrumb cut at invalid node");
            (cut, None)
        }
        None => (bottom, Some(ctx.level(of, ctx.resolve(of)?, Vec::new()))),
    };

    while path_index > top {
        let level = surround(ctx, &path, path_index, path_level, sibling_filter)?;
        path_index -= 1;
        let ancestor = path[path_index];
        path_level = Some(ctx.level(ancestor, ctx.resolve(ancestor)?, level));
    }

    surround(ctx, &path, path_index, path_level, sibling_filter)
}

/// The level holding `path_level` for `path[index]`: alone, or among its
/// filtered siblings. `path_level` is `None` when that node was pruned.
fn surround<R: EntityResolver>(
    ctx: &NavigationContext<'_, R>,
    path: &[NodeId],
    index: usize,
    path_level: Option<LevelInfo<R::Entity>>,
    sibling_filter: Option<Predicate<'_, R::Entity>>,
) -> Result<Vec<LevelInfo<R::Entity>>, R::Error> {
    let Some(filter) = sibling_filter else {
        return Ok(path_level.into_iter().collect());
    };

    let path_id = path[index];
    let siblings = ctx.hierarchy().siblings_of(path_id);
    let mut path_level = path_level;
    let mut level = Vec::with_capacity(siblings.len());
    for &sibling in siblings {
        if sibling == path_id {
            level.extend(path_level.take());
            continue;
        }
        if !ctx.is_visible(sibling) {
            tracing::trace!(node = sibling.as_u32(), "pruned invalid sibling");
            continue;
        }
        let entity = ctx.resolve(sibling)?;
        if !filter(&entity) {
            tracing::trace!(node = sibling.as_u32(), "sibling rejected by filter");
            continue;
        }
        // Siblings sit on the path node's level, index + 1.
        let children = build_level(
            ctx,
            ctx.hierarchy().children_of(sibling),
            index + 2,
            None,
            None,
        )?;
        level.push(ctx.level(sibling, entity, children));
    }
    debug_assert!(path_level.is_none(), "path node missing from its siblings");
    Ok(level)
}
