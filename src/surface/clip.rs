// MIT/Apache2 License

use crate::geometry::{path_bounds, winding_number, DEFAULT_TOLERANCE};
use lyon_geom::{Point, Rect};
use lyon_path::Path;

/// The area of a surface that painting is restricted to.
///
/// A region is the intersection of zero or more closed paths in device space. With no paths
/// the region is unbounded and nothing is clipped. Paths are filled with the non-zero winding
/// rule.
#[derive(Debug, Clone, Default)]
pub struct ClipRegion {
    paths: Vec<Path>,
}

impl ClipRegion {
    /// A region that does not clip anything.
    #[inline]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A region covering the inside of a single path.
    #[inline]
    pub fn from_path(path: Path) -> Self {
        Self { paths: vec![path] }
    }

    /// Tell if this region clips nothing.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.paths.is_empty()
    }

    /// The paths this region is the intersection of.
    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Shrink this region to its intersection with `path`.
    #[inline]
    pub fn intersect(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Tell if a device-space point lies inside of the region.
    #[inline]
    pub fn contains(&self, point: Point<f32>) -> bool {
        self.contains_with_tolerance(point, DEFAULT_TOLERANCE)
    }

    /// Tell if a device-space point lies inside of the region, flattening curves with the
    /// given tolerance.
    pub fn contains_with_tolerance(&self, point: Point<f32>, tolerance: f32) -> bool {
        self.paths
            .iter()
            .all(|path| winding_number(path.as_slice(), point, tolerance) != 0)
    }

    /// The bounding rectangle of the region.
    ///
    /// This is the intersection of the bounding rectangles of every path, which is exact when
    /// the paths are axis-aligned rectangles. Returns `None` for an unbounded region and an
    /// empty rectangle if the paths do not overlap.
    pub fn bounds(&self) -> Option<Rect<f32>> {
        let mut bounds = self.paths.iter().map(|path| path_bounds(path.as_slice()));
        let first = bounds.next()?;

        let combined = bounds.fold(first, |acc, next| match (acc, next) {
            (Some(acc), Some(next)) => acc.intersection(&next),
            _ => None,
        });

        Some(combined.unwrap_or_else(Rect::zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{rect, rect_path};
    use approx::assert_abs_diff_eq;

    #[test]
    fn unbounded_contains_everything() {
        let region = ClipRegion::unbounded();
        assert!(region.is_unbounded());
        assert!(region.contains(Point::new(-1.0e6, 1.0e6)));
        assert!(region.bounds().is_none());
    }

    #[test]
    fn intersection_of_rectangles() {
        let mut region = ClipRegion::from_path(rect_path(&rect(0.0, 0.0, 10.0, 10.0)));
        region.intersect(rect_path(&rect(5.0, 5.0, 10.0, 10.0)));

        let bounds = region.bounds().unwrap();
        assert_abs_diff_eq!(bounds.min_x(), 5.0);
        assert_abs_diff_eq!(bounds.min_y(), 5.0);
        assert_abs_diff_eq!(bounds.max_x(), 10.0);
        assert_abs_diff_eq!(bounds.max_y(), 10.0);

        assert!(region.contains(Point::new(7.0, 7.0)));
        assert!(!region.contains(Point::new(2.0, 2.0)));
        assert!(!region.contains(Point::new(12.0, 12.0)));
    }

    #[test]
    fn disjoint_rectangles_are_empty() {
        let mut region = ClipRegion::from_path(rect_path(&rect(0.0, 0.0, 1.0, 1.0)));
        region.intersect(rect_path(&rect(3.0, 3.0, 1.0, 1.0)));

        assert!(region.bounds().unwrap().is_empty());
        assert!(!region.contains(Point::new(0.5, 0.5)));
    }
}
