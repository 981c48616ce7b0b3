// MIT/Apache2 License

//! Small geometry helpers shared by the mask, the shapes and the surfaces.

use lyon_geom::euclid::default::Transform2D;
use lyon_geom::{Point, Rect, Size, Vector};
use lyon_path::{builder::PathBuilder, iterator::PathIterator, Path, PathEvent, PathSlice};

/// A two-dimensional affine transform.
///
/// Transforms compose left to right: `a.then(&b)` applies `a` first and `b` second.
pub type Transform = Transform2D<f32>;

/// Tolerance used when flattening curves for bounds and hit-testing.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Build a rectangle from its top-left corner and its size.
#[inline]
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect<f32> {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// Get the transform that maps the unit square `(0, 0, 1, 1)` onto `rect`.
///
/// This is how shape-relative (bounding box) units are turned into user space.
#[inline]
pub fn map_to_rect(rect: &Rect<f32>) -> Transform {
    Transform::scale(rect.size.width, rect.size.height)
        .then_translate(Vector::new(rect.origin.x, rect.origin.y))
}

/// Map the four corners of `rect` through `transform`.
///
/// The corners are returned clockwise starting at the top-left one. Unlike mapping the
/// bounding rectangle, this keeps rotations and skews intact.
#[inline]
pub fn mapped_rect_polygon(transform: &Transform, rect: &Rect<f32>) -> [Point<f32>; 4] {
    let (x0, y0) = (rect.min_x(), rect.min_y());
    let (x1, y1) = (rect.max_x(), rect.max_y());
    [
        transform.transform_point(Point::new(x0, y0)),
        transform.transform_point(Point::new(x1, y0)),
        transform.transform_point(Point::new(x1, y1)),
        transform.transform_point(Point::new(x0, y1)),
    ]
}

/// Create a closed path going around a rectangle.
#[inline]
pub fn rect_path(rect: &Rect<f32>) -> Path {
    polygon_path(&mapped_rect_polygon(&Transform::identity(), rect))
}

/// Create a closed path out of a polygon's points.
///
/// An empty slice yields an empty path.
pub fn polygon_path(points: &[Point<f32>]) -> Path {
    let mut builder = Path::builder();
    if let Some((first, rest)) = points.split_first() {
        builder.begin(*first);
        for point in rest {
            builder.line_to(*point);
        }
        builder.close();
    }
    builder.build()
}

/// Map every point of a path through a transform.
pub fn transform_path(path: PathSlice<'_>, transform: &Transform) -> Path {
    let mut builder = Path::builder();
    let map = |p: Point<f32>| transform.transform_point(p);

    for event in path.iter() {
        match event {
            PathEvent::Begin { at } => {
                builder.begin(map(at));
            }
            PathEvent::Line { to, .. } => {
                builder.line_to(map(to));
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(map(ctrl), map(to));
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                builder.cubic_bezier_to(map(ctrl1), map(ctrl2), map(to));
            }
            PathEvent::End { close, .. } => {
                builder.end(close);
            }
        }
    }

    builder.build()
}

/// Get the tight bounding rectangle of a path, or `None` if the path has no points.
pub fn path_bounds(path: PathSlice<'_>) -> Option<Rect<f32>> {
    let mut points = path
        .iter()
        .flattened(DEFAULT_TOLERANCE)
        .filter_map(|event| match event {
            PathEvent::Begin { at } => Some(at),
            PathEvent::Line { to, .. } => Some(to),
            _ => None,
        });

    let first = points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), p| {
        (min.min(p), max.max(p))
    });

    Some(Rect::new(min, (max - min).to_size()))
}

/// The signed number of times the closed outline of `path` winds around `point`.
///
/// Curves are flattened with `tolerance`. Open sub-paths are treated as closed.
pub(crate) fn winding_number(path: PathSlice<'_>, point: Point<f32>, tolerance: f32) -> i32 {
    path.iter()
        .flattened(tolerance)
        .filter_map(|event| match event {
            PathEvent::Line { from, to } => Some((from, to)),
            PathEvent::End { last, first, .. } => Some((last, first)),
            _ => None,
        })
        .map(|(from, to)| edge_winding(from, to, point))
        .sum()
}

#[inline]
fn edge_winding(from: Point<f32>, to: Point<f32>, p: Point<f32>) -> i32 {
    // left of the edge when positive
    let side = (to.x - from.x) * (p.y - from.y) - (p.x - from.x) * (to.y - from.y);
    if from.y <= p.y {
        if to.y > p.y && side > 0.0 {
            return 1;
        }
    } else if to.y <= p.y && side < 0.0 {
        return -1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn map_to_rect_maps_unit_square_corners() {
        let t = map_to_rect(&rect(10.0, 20.0, 100.0, 50.0));
        let origin = t.transform_point(Point::new(0.0, 0.0));
        let far = t.transform_point(Point::new(1.0, 1.0));

        assert_abs_diff_eq!(origin.x, 10.0);
        assert_abs_diff_eq!(origin.y, 20.0);
        assert_abs_diff_eq!(far.x, 110.0);
        assert_abs_diff_eq!(far.y, 70.0);
    }

    #[test]
    fn bounds_of_rect_path() {
        let r = rect(-3.0, 4.0, 6.0, 2.0);
        let bounds = path_bounds(rect_path(&r).as_slice()).unwrap();
        assert_abs_diff_eq!(bounds.min_x(), -3.0);
        assert_abs_diff_eq!(bounds.min_y(), 4.0);
        assert_abs_diff_eq!(bounds.max_x(), 3.0);
        assert_abs_diff_eq!(bounds.max_y(), 6.0);

        assert!(path_bounds(Path::new().as_slice()).is_none());
    }

    #[test]
    fn winding_inside_and_outside() {
        let path = rect_path(&rect(0.0, 0.0, 10.0, 10.0));
        assert_ne!(winding_number(path.as_slice(), Point::new(5.0, 5.0), 0.1), 0);
        assert_eq!(winding_number(path.as_slice(), Point::new(15.0, 5.0), 0.1), 0);
        assert_eq!(winding_number(path.as_slice(), Point::new(5.0, -1.0), 0.1), 0);
    }

    #[test]
    fn transform_path_moves_every_point() {
        let path = rect_path(&rect(0.0, 0.0, 1.0, 1.0));
        let moved = transform_path(
            path.as_slice(),
            &Transform::translation(5.0, -2.0).then_scale(2.0, 2.0),
        );
        let bounds = path_bounds(moved.as_slice()).unwrap();
        assert_abs_diff_eq!(bounds.min_x(), 10.0);
        assert_abs_diff_eq!(bounds.min_y(), -4.0);
        assert_abs_diff_eq!(bounds.size.width, 2.0);
    }
}
