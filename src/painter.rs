// MIT/Apache2 License

use crate::{save_state, Shape, Surface};

/// Paints a collection of shapes onto a surface.
///
/// Shapes are painted bottom to top by z-index; shapes with equal z-indices keep the order
/// they were given in. Invisible shapes are skipped. Each shape is painted in its own saved
/// state with its absolute transform applied on top of the surface's transform, so nothing a
/// shape sets leaks into the next one.
#[derive(Debug, Default)]
pub struct ShapePainter<'a> {
    shapes: Vec<&'a dyn Shape>,
}

impl<'a> ShapePainter<'a> {
    /// Create a painter with no shapes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shapes this painter paints.
    pub fn set_shapes<I: IntoIterator<Item = &'a dyn Shape>>(&mut self, shapes: I) {
        self.shapes = shapes.into_iter().collect();
        // stable, so equal z-indices stay in insertion order
        self.shapes.sort_by_key(|shape| shape.z_index());
    }

    /// The shapes in painting order.
    #[inline]
    pub fn shapes(&self) -> &[&'a dyn Shape] {
        &self.shapes
    }

    /// Paint every visible shape onto `surface`.
    pub fn paint(&self, surface: &mut dyn Surface) -> crate::Result {
        for shape in self.shapes.iter().filter(|shape| shape.is_visible()) {
            log::trace!("Painting shape {:?}", shape);
            let mut guard = save_state(&mut *surface);
            guard.set_transform(shape.absolute_transform(), true);
            shape.paint(&mut *guard)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::rect, Color, DrawKind, FillRule, PathShape, RecordingSurface, Transform};
    use lyon_geom::Point;

    fn color(v: f32) -> Color {
        Color::new(v, v, v, 1.0).unwrap()
    }

    #[test]
    fn paints_in_z_order_and_skips_hidden() {
        let top = PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0))
            .with_fill(color(1.0))
            .with_z_index(5);
        let bottom = PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0)).with_fill(color(0.0));
        let mut hidden = PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0)).with_fill(color(0.5));
        hidden.set_visible(false);

        let mut painter = ShapePainter::new();
        painter.set_shapes(vec![&top as &dyn Shape, &hidden, &bottom]);

        let mut surface = RecordingSurface::new();
        painter.paint(&mut surface).unwrap();

        let kinds: Vec<_> = surface.commands().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DrawKind::Fill(FillRule::SolidColor(color(0.0))),
                DrawKind::Fill(FillRule::SolidColor(color(1.0))),
            ]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn applies_absolute_transform_per_shape() {
        let moved = PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0))
            .with_transform(Transform::translation(10.0, 10.0));
        let still = PathShape::from_rect(&rect(0.0, 0.0, 1.0, 1.0));

        let mut painter = ShapePainter::new();
        painter.set_shapes(vec![&moved as &dyn Shape, &still]);

        let mut surface = RecordingSurface::new();
        surface.set_transform(Transform::scale(2.0, 2.0), false);
        painter.paint(&mut surface).unwrap();

        assert!(surface.painted_at(Point::new(21.0, 21.0)).is_some());
        assert!(surface.painted_at(Point::new(1.0, 1.0)).is_some());
        assert!(surface.painted_at(Point::new(5.0, 5.0)).is_none());
        assert_eq!(surface.transform(), Transform::scale(2.0, 2.0));
    }
}
