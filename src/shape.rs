// MIT/Apache2 License

use crate::{
    geometry::{path_bounds, rect_path},
    Color, FillRule, Surface, Transform,
};
use lyon_geom::Rect;
use lyon_path::Path;
use std::fmt;

/// A vector shape that can be painted onto a [`Surface`].
///
/// Shapes describe their geometry in their own local coordinate space. The absolute transform
/// maps that space into the user space of whatever document the shape lives in; painters
/// apply it before asking the shape to paint itself.
pub trait Shape: fmt::Debug {
    /// The outline of this shape, in local coordinates.
    fn outline(&self) -> Path;

    /// The bounding rectangle of the outline, in local coordinates.
    #[inline]
    fn outline_rect(&self) -> Rect<f32> {
        path_bounds(self.outline().as_slice()).unwrap_or_else(Rect::zero)
    }

    /// The transform mapping local coordinates into user space.
    fn absolute_transform(&self) -> Transform;

    /// Apply `transform` after the current absolute transform.
    fn apply_absolute_transform(&mut self, transform: &Transform);

    /// Create an independent deep copy of this shape.
    ///
    /// Returns `None` if the shape cannot be copied, for instance because it refers to a
    /// resource that is not cloneable.
    fn clone_shape(&self) -> Option<Box<dyn Shape>>;

    /// Whether this shape should be painted at all.
    #[inline]
    fn is_visible(&self) -> bool {
        true
    }

    /// The stacking order of this shape. Higher values are painted later, on top.
    #[inline]
    fn z_index(&self) -> i32 {
        0
    }

    /// Paint this shape in local coordinates.
    fn paint(&self, surface: &mut dyn Surface) -> crate::Result;
}

/// A shape made out of a single path, filled and optionally stroked.
#[derive(Debug, Clone)]
pub struct PathShape {
    path: Path,
    transform: Transform,
    fill: FillRule,
    stroke: Option<Color>,
    visible: bool,
    z_index: i32,
}

impl PathShape {
    /// Create a new shape out of a path, filled in black.
    #[inline]
    pub fn new(path: Path) -> Self {
        Self {
            path,
            transform: Transform::identity(),
            fill: FillRule::default(),
            stroke: None,
            visible: true,
            z_index: 0,
        }
    }

    /// Create a new rectangular shape.
    #[inline]
    pub fn from_rect(rect: &Rect<f32>) -> Self {
        Self::new(rect_path(rect))
    }

    /// Set the fill of this shape.
    #[inline]
    pub fn with_fill(mut self, fill: impl Into<FillRule>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the stroke color of this shape.
    #[inline]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the stacking order of this shape.
    #[inline]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the absolute transform of this shape.
    #[inline]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn fill(&self) -> FillRule {
        self.fill
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Shape for PathShape {
    #[inline]
    fn outline(&self) -> Path {
        self.path.clone()
    }

    #[inline]
    fn absolute_transform(&self) -> Transform {
        self.transform
    }

    #[inline]
    fn apply_absolute_transform(&mut self, transform: &Transform) {
        self.transform = self.transform.then(transform);
    }

    #[inline]
    fn clone_shape(&self) -> Option<Box<dyn Shape>> {
        Some(Box::new(self.clone()))
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn paint(&self, surface: &mut dyn Surface) -> crate::Result {
        surface.set_fill(self.fill)?;
        surface.fill_path(self.path.as_slice())?;

        if let Some(stroke) = self.stroke {
            surface.set_stroke(Some(stroke))?;
            surface.draw_path(self.path.as_slice())?;
        }

        Ok(())
    }
}
