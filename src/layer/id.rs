// MIT/Apache2 License

use std::fmt;

/// Sentinel value meaning "no node" in the tree's index links.
pub(crate) const INVALID: u32 = u32::MAX;

/// A handle to a node in a [`LayerTree`](super::LayerTree).
///
/// Handles do not own anything. Each one holds a slot index and the generation of that slot
/// at the time the node was created; once the node is destroyed and the slot reused, the old
/// handle stops resolving.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// The raw slot index. Only meaningful for diagnostics.
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    /// The generation of the slot this handle was created for.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@gen{})", self.index, self.generation)
    }
}
