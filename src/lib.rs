// MIT/Apache2 License

//! Clip masks and filter layer selection for a layered image editor.
//!
//! This crate contains two small collaborators that a host image editor plugs into its
//! rendering and filtering pipelines:
//!
//! * [`ClipMask`], which clips painting on a [`Surface`] to a rectangle and paints a set of
//!   vector [`Shape`]s inside of it, either relative to a target shape's bounds or in
//!   absolute coordinates.
//! * [`InputOutputMapper`], which resolves an [`InputLayerMode`] requested by a filter plugin
//!   into the list of layers in a [`LayerTree`] that the plugin should read from.
//!
//! The surface, shape and layer tree types are deliberately small; they describe what the
//! collaborators need from the host and nothing more.

mod error;

pub mod color;
pub mod fill;
pub mod geometry;
pub mod intensity;
pub mod layer;
pub mod mapper;
pub mod mask;
pub mod painter;
pub mod shape;
pub mod surface;

pub use color::*;
pub use error::*;
pub use fill::*;
pub use geometry::*;
pub use intensity::*;
pub use layer::*;
pub use mapper::*;
pub use mask::*;
pub use painter::*;
pub use shape::*;
pub use surface::*;
