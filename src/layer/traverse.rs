// MIT/Apache2 License

use super::id::{NodeId, INVALID};
use super::tree::LayerTree;
use std::iter::FusedIterator;

/// An iterator over the direct children of a node, bottom to top.
///
/// Iterate with `.rev()` to go top to bottom. Created by [`LayerTree::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a LayerTree,
    front: u32,
    back: u32,
}

impl<'a> Children<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a LayerTree, first: u32, last: u32) -> Self {
        Self {
            tree,
            front: first,
            back: last,
        }
    }

    #[inline]
    fn finish_if_met(&mut self, idx: u32) {
        if self.front == idx && self.back == idx {
            self.front = INVALID;
            self.back = INVALID;
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.front == INVALID {
            return None;
        }
        let idx = self.front;
        self.finish_if_met(idx);
        if self.front != INVALID {
            self.front = self.tree.slot(idx).next_sibling;
        }
        Some(self.tree.id_at(idx))
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<NodeId> {
        if self.back == INVALID {
            return None;
        }
        let idx = self.back;
        self.finish_if_met(idx);
        if self.back != INVALID {
            self.back = self.tree.slot(idx).prev_sibling;
        }
        Some(self.tree.id_at(idx))
    }
}

impl FusedIterator for Children<'_> {}
