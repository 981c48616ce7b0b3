// MIT/Apache2 License

//! The layer tree of an image.
//!
//! Layers are stored in an arena owned by [`LayerTree`] and addressed by generational
//! [`NodeId`] handles. Children of a node are ordered bottom to top: the first child is the
//! bottom-most layer and the previous sibling of a layer is the one directly below it.

mod id;
mod traverse;
mod tree;

pub use id::NodeId;
pub use traverse::Children;
pub use tree::{LayerTree, NodeKind, PaintLayer};
