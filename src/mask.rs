// MIT/Apache2 License

//! Clip masks: a rectangle restricting painting, plus vector content painted inside of it.

use crate::{
    geometry::{map_to_rect, mapped_rect_polygon, polygon_path, rect, rect_path, transform_path},
    save_state, ClipOperation, Shape, ShapePainter, Surface, Transform,
};
use lyon_geom::{Point, Rect, Vector};

/// The default mask rectangle: the unit square, grown by 10% on every side.
pub const DEFAULT_MASK_RECT: [f32; 4] = [-0.1, -0.1, 1.2, 1.2];

/// How the geometry of a mask is interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoordinateSystem {
    /// Coordinates are fractions of the target shape's outline rectangle, so `(0, 0)` is its
    /// top-left corner and `(1, 1)` its bottom-right one. The mask scales with the shape.
    ShapeRelative,
    /// Coordinates are in the user space of the target shape, mapped through the mask's
    /// auxiliary transform.
    Absolute,
}

/// A clip mask that can be drawn over a target shape.
///
/// The mask consists of two independent parts:
///
/// * The mask rectangle, which is intersected with the surface's clip region. Its
///   [`coordinates`](Self::coordinates) decide whether it is relative to the target shape.
/// * The mask shapes, which are painted inside of that clip. Their
///   [`content_coordinates`](Self::content_coordinates) decide whether they are stretched
///   over the target shape.
///
/// The mask owns its shapes. Cloning a mask clones every shape.
#[derive(Debug)]
pub struct ClipMask {
    coordinates: CoordinateSystem,
    content_coordinates: CoordinateSystem,
    mask_rect: Rect<f32>,
    shapes: Vec<Box<dyn Shape>>,
    auxiliary_transform: Transform,
}

impl Default for ClipMask {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ClipMask {
    fn clone(&self) -> Self {
        let shapes = self
            .shapes
            .iter()
            .filter_map(|shape| {
                let cloned = shape.clone_shape();
                if cloned.is_none() {
                    log::error!("Failed to clone mask shape {:?}, skipping it", shape);
                }
                cloned
            })
            .collect();

        Self {
            coordinates: self.coordinates,
            content_coordinates: self.content_coordinates,
            mask_rect: self.mask_rect,
            shapes,
            auxiliary_transform: self.auxiliary_transform,
        }
    }
}

impl ClipMask {
    /// Create an empty mask with a shape-relative mask rectangle and absolute content.
    #[inline]
    pub fn new() -> Self {
        let [x, y, width, height] = DEFAULT_MASK_RECT;
        Self {
            coordinates: CoordinateSystem::ShapeRelative,
            content_coordinates: CoordinateSystem::Absolute,
            mask_rect: rect(x, y, width, height),
            shapes: Vec::new(),
            auxiliary_transform: Transform::identity(),
        }
    }

    #[inline]
    pub fn coordinates(&self) -> CoordinateSystem {
        self.coordinates
    }

    #[inline]
    pub fn set_coordinates(&mut self, coordinates: CoordinateSystem) {
        self.coordinates = coordinates;
    }

    #[inline]
    pub fn content_coordinates(&self) -> CoordinateSystem {
        self.content_coordinates
    }

    #[inline]
    pub fn set_content_coordinates(&mut self, coordinates: CoordinateSystem) {
        self.content_coordinates = coordinates;
    }

    #[inline]
    pub fn mask_rect(&self) -> Rect<f32> {
        self.mask_rect
    }

    #[inline]
    pub fn set_mask_rect(&mut self, mask_rect: Rect<f32>) {
        self.mask_rect = mask_rect;
    }

    #[inline]
    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    #[inline]
    pub fn shapes_mut(&mut self) -> &mut [Box<dyn Shape>] {
        &mut self.shapes
    }

    /// Replace the mask shapes. The previous shapes are dropped.
    #[inline]
    pub fn set_shapes(&mut self, shapes: Vec<Box<dyn Shape>>) {
        self.shapes = shapes;
    }

    #[inline]
    pub fn auxiliary_transform(&self) -> Transform {
        self.auxiliary_transform
    }

    #[inline]
    pub fn set_auxiliary_transform(&mut self, transform: Transform) {
        self.auxiliary_transform = transform;
    }

    /// Tell if there are no mask shapes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Move the absolute parts of the mask by `offset`.
    ///
    /// The shapes are moved only if the content coordinates are absolute, and the mask
    /// rectangle only if the mask coordinates are absolute. Shape-relative parts follow the
    /// target shape on their own.
    pub fn set_extra_shape_offset(&mut self, offset: Vector<f32>) {
        if let CoordinateSystem::Absolute = self.content_coordinates {
            let translation = Transform::translation(offset.x, offset.y);
            for shape in &mut self.shapes {
                shape.apply_absolute_transform(&translation);
            }
        }

        if let CoordinateSystem::Absolute = self.coordinates {
            self.mask_rect = self.mask_rect.translate(offset);
        }
    }

    /// Clip `surface` to this mask and paint the mask shapes over `shape`.
    ///
    /// The existing clip region of the surface is intersected, never replaced. The painting
    /// state of the surface is restored before returning, even if painting fails.
    pub fn draw_mask(&self, surface: &mut dyn Surface, shape: &dyn Shape) -> crate::Result {
        let mut guard = save_state(surface);

        let relative_to_shape = map_to_rect(&shape.outline_rect());

        let clip_path = match self.coordinates {
            CoordinateSystem::ShapeRelative => {
                polygon_path(&mapped_rect_polygon(&relative_to_shape, &self.mask_rect))
            }
            CoordinateSystem::Absolute => transform_path(
                rect_path(&self.mask_rect).as_slice(),
                &self.auxiliary_transform,
            ),
        };

        log::debug!(
            "Drawing clip mask with {} shapes, clip origin {:?}",
            self.shapes.len(),
            relative_to_shape.transform_point(Point::new(0.0, 0.0)),
        );

        guard.set_clip_path(clip_path.as_slice(), ClipOperation::Intersect)?;

        match self.content_coordinates {
            CoordinateSystem::ShapeRelative => guard.set_transform(relative_to_shape, true),
            CoordinateSystem::Absolute => guard.set_transform(self.auxiliary_transform, true),
        }

        let mut painter = ShapePainter::new();
        painter.set_shapes(self.shapes.iter().map(|shape| -> &dyn Shape { &**shape }));
        painter.paint(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, FillRule, PathShape, RecordingSurface};
    use approx::assert_abs_diff_eq;

    /// A shape that refuses to be cloned.
    #[derive(Debug)]
    struct Unclonable;

    impl Shape for Unclonable {
        fn outline(&self) -> lyon_path::Path {
            rect_path(&rect(0.0, 0.0, 1.0, 1.0))
        }
        fn absolute_transform(&self) -> Transform {
            Transform::identity()
        }
        fn apply_absolute_transform(&mut self, _transform: &Transform) {}
        fn clone_shape(&self) -> Option<Box<dyn Shape>> {
            None
        }
        fn paint(&self, _surface: &mut dyn Surface) -> crate::Result {
            Ok(())
        }
    }

    fn unit_shape() -> Box<dyn Shape> {
        Box::new(PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0)).with_fill(Color::WHITE))
    }

    fn origin_of(shape: &dyn Shape) -> Point<f32> {
        shape
            .absolute_transform()
            .transform_point(Point::new(0.0, 0.0))
    }

    #[test]
    fn defaults() {
        let mask = ClipMask::new();
        assert_eq!(mask.coordinates(), CoordinateSystem::ShapeRelative);
        assert_eq!(mask.content_coordinates(), CoordinateSystem::Absolute);
        assert_eq!(mask.mask_rect(), rect(-0.1, -0.1, 1.2, 1.2));
        assert_eq!(mask.auxiliary_transform(), Transform::identity());
        assert!(mask.is_empty());
    }

    #[test]
    fn is_empty_tracks_shapes() {
        let mut mask = ClipMask::new();
        mask.set_shapes(vec![unit_shape(), unit_shape()]);
        assert!(!mask.is_empty());
        mask.set_shapes(Vec::new());
        assert!(mask.is_empty());
        mask.set_shapes(vec![unit_shape()]);
        assert!(!mask.is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let mut original = ClipMask::new();
        original.set_shapes(vec![unit_shape(), unit_shape(), unit_shape()]);

        let mut copy = original.clone();
        assert_eq!(copy.shapes().len(), 3);

        copy.shapes_mut()[0].apply_absolute_transform(&Transform::translation(5.0, 5.0));
        assert_eq!(origin_of(&*copy.shapes()[0]), Point::new(5.0, 5.0));
        assert_eq!(origin_of(&*original.shapes()[0]), Point::new(0.0, 0.0));
    }

    #[test]
    fn clone_skips_unclonable_shapes() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut original = ClipMask::new();
        original.set_shapes(vec![unit_shape(), Box::new(Unclonable), unit_shape()]);

        let copy = original.clone();
        assert_eq!(copy.shapes().len(), 2);
        assert_eq!(original.shapes().len(), 3);
    }

    #[test]
    fn extra_offset_only_moves_absolute_parts() {
        let offset = Vector::new(3.0, -2.0);

        // shape-relative rectangle, absolute content
        let mut mask = ClipMask::new();
        mask.set_shapes(vec![unit_shape()]);
        mask.set_extra_shape_offset(offset);
        assert_eq!(mask.mask_rect(), rect(-0.1, -0.1, 1.2, 1.2));
        assert_eq!(origin_of(&*mask.shapes()[0]), Point::new(3.0, -2.0));

        // absolute rectangle, shape-relative content
        let mut mask = ClipMask::new();
        mask.set_shapes(vec![unit_shape()]);
        mask.set_coordinates(CoordinateSystem::Absolute);
        mask.set_content_coordinates(CoordinateSystem::ShapeRelative);
        mask.set_mask_rect(rect(10.0, 10.0, 5.0, 5.0));
        mask.set_extra_shape_offset(offset);
        let moved = mask.mask_rect();
        assert_abs_diff_eq!(moved.origin.x, 13.0);
        assert_abs_diff_eq!(moved.origin.y, 8.0);
        assert_abs_diff_eq!(moved.size.width, 5.0);
        assert_eq!(origin_of(&*mask.shapes()[0]), Point::new(0.0, 0.0));
    }

    #[test]
    fn shape_relative_mask_follows_target() {
        let target = PathShape::from_rect(&rect(100.0, 100.0, 50.0, 20.0));

        let mut mask = ClipMask::new();
        mask.set_content_coordinates(CoordinateSystem::ShapeRelative);
        mask.set_shapes(vec![unit_shape()]);

        let mut surface = RecordingSurface::new();
        mask.draw_mask(&mut surface, &target).unwrap();

        // the clip is the target's outline rect padded by 10%
        let bounds = surface.commands()[0].clip.bounds().unwrap();
        assert_abs_diff_eq!(bounds.min_x(), 95.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bounds.min_y(), 98.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bounds.max_x(), 155.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bounds.max_y(), 122.0, epsilon = 1e-3);

        // the unit square content is stretched over the target
        assert_eq!(
            surface.painted_at(Point::new(149.0, 119.0)),
            Some(FillRule::SolidColor(Color::WHITE))
        );
        assert_eq!(surface.painted_at(Point::new(99.0, 110.0)), None);
    }

    #[test]
    fn absolute_mask_uses_auxiliary_transform() {
        let target = PathShape::from_rect(&rect(0.0, 0.0, 10.0, 10.0));

        let mut mask = ClipMask::new();
        mask.set_coordinates(CoordinateSystem::Absolute);
        mask.set_mask_rect(rect(0.0, 0.0, 4.0, 4.0));
        mask.set_auxiliary_transform(Transform::translation(1.0, 1.0));
        mask.set_shapes(vec![Box::new(
            PathShape::from_rect(&rect(0.0, 0.0, 100.0, 100.0)).with_fill(Color::WHITE),
        )]);

        let mut surface = RecordingSurface::new();
        mask.draw_mask(&mut surface, &target).unwrap();

        assert!(surface.painted_at(Point::new(2.0, 2.0)).is_some());
        assert!(surface.painted_at(Point::new(0.5, 0.5)).is_none());
        assert!(surface.painted_at(Point::new(5.5, 3.0)).is_none());
    }

    #[test]
    fn absolute_content_follows_auxiliary_transform() {
        let target = PathShape::from_rect(&rect(0.0, 0.0, 10.0, 10.0));

        // the shape-relative clip covers the whole target, so only the content decides
        let mut mask = ClipMask::new();
        mask.set_auxiliary_transform(Transform::translation(5.0, 5.0));
        mask.set_shapes(vec![unit_shape()]);

        let mut surface = RecordingSurface::new();
        mask.draw_mask(&mut surface, &target).unwrap();

        assert_eq!(surface.commands().len(), 1);
        assert_eq!(
            surface.painted_at(Point::new(5.5, 5.5)),
            Some(FillRule::SolidColor(Color::WHITE))
        );
        assert_eq!(surface.painted_at(Point::new(0.5, 0.5)), None);
        assert_eq!(surface.transform(), Transform::identity());
    }

    #[test]
    fn draw_mask_restores_state() {
        let target = PathShape::from_rect(&rect(0.0, 0.0, 10.0, 10.0));
        let mut mask = ClipMask::new();
        mask.set_content_coordinates(CoordinateSystem::ShapeRelative);
        mask.set_shapes(vec![unit_shape()]);

        let mut surface = RecordingSurface::new();
        surface.set_transform(Transform::translation(7.0, 7.0), false);
        mask.draw_mask(&mut surface, &target).unwrap();

        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.transform(), Transform::translation(7.0, 7.0));
        assert!(surface.clip_region().is_unbounded());
    }

    #[test]
    fn draw_mask_restores_state_on_failure() {
        let target = PathShape::from_rect(&rect(0.0, 0.0, 10.0, 10.0));
        let mut mask = ClipMask::new();
        mask.set_shapes(vec![Box::new(
            PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0)).with_stroke(Color::BLACK),
        )]);

        let mut surface = RecordingSurface::new().without_strokes();
        assert!(mask.draw_mask(&mut surface, &target).is_err());
        assert_eq!(surface.depth(), 0);
        assert!(surface.clip_region().is_unbounded());
    }
}
