//! Output tree nodes.

use serde::Serialize;

/// One annotated node of a navigation result.
///
/// `entity` is whatever the caller's resolver produced. Counts are `None`
/// when they were not requested or no cardinality source was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo<E> {
    pub entity: E,
    /// Node is the one the caller navigated from
    pub requested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_count: Option<u64>,
    pub children: Vec<LevelInfo<E>>,
}

impl<E> LevelInfo<E> {
    /// Bare level without counts or children.
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            requested: false,
            cardinality: None,
            children_count: None,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(LevelInfo::subtree_size)
            .sum::<usize>()
    }

    /// Longest path from `self` down to a leaf, counted in levels.
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(LevelInfo::height)
            .max()
            .unwrap_or(0)
    }

    /// First level in depth-first order whose entity satisfies `pred`.
    pub fn find(&self, pred: &dyn Fn(&E) -> bool) -> Option<&LevelInfo<E>> {
        if pred(&self.entity) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }
}
