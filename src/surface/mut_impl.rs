// MIT/Apache2 License

use super::{ClipOperation, ClipRegion, Surface};
use crate::{Color, FillRule, Transform};
use lyon_geom::Rect;
use lyon_path::PathSlice;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn save(&mut self) {
        (**self).save()
    }
    #[inline]
    fn restore(&mut self) {
        (**self).restore()
    }
    #[inline]
    fn transform(&self) -> Transform {
        (**self).transform()
    }
    #[inline]
    fn set_transform(&mut self, transform: Transform, combine: bool) {
        (**self).set_transform(transform, combine)
    }
    #[inline]
    fn clip_region(&self) -> &ClipRegion {
        (**self).clip_region()
    }
    #[inline]
    fn set_clip_path(&mut self, path: PathSlice<'_>, op: ClipOperation) -> crate::Result {
        (**self).set_clip_path(path, op)
    }
    #[inline]
    fn set_fill(&mut self, fill: FillRule) -> crate::Result {
        (**self).set_fill(fill)
    }
    #[inline]
    fn set_stroke(&mut self, stroke: Option<Color>) -> crate::Result {
        (**self).set_stroke(stroke)
    }
    #[inline]
    fn fill_path(&mut self, path: PathSlice<'_>) -> crate::Result {
        (**self).fill_path(path)
    }
    #[inline]
    fn draw_path(&mut self, path: PathSlice<'_>) -> crate::Result {
        (**self).draw_path(path)
    }
    #[inline]
    fn fill_rect(&mut self, rect: &Rect<f32>) -> crate::Result {
        (**self).fill_rect(rect)
    }
}
