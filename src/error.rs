// MIT/Apache2 License

use crate::layer::NodeId;
use std::fmt;

/// Sum error type for easel operations.
#[derive(Debug)]
pub enum Error {
    /// Attempted to run an unsupported operation.
    NotSupported(NotSupportedOp),
    /// The node handle refers to a layer that no longer exists.
    StaleNode(NodeId),
    /// The requested change would corrupt the layer tree.
    InvalidTopology(&'static str),
}

/// An operation that is not supported by a surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotSupportedOp {
    /// Stroking outlines.
    Strokes,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported(nsop) => {
                write!(f, "Surface does not support feature \"{:?}\"", nsop)
            }
            Self::StaleNode(id) => write!(f, "Layer {:?} does not exist", id),
            Self::InvalidTopology(s) => write!(f, "Invalid layer tree change: {}", s),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
