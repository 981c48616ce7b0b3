// MIT/Apache2 License

use crate::{geometry::rect_path, Color, FillRule, Transform};
use lyon_geom::Rect;
use lyon_path::PathSlice;
use std::ops::{Deref, DerefMut};

/// Provides the `ClipRegion` type.
mod clip;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;
/// Provides the `RecordingSurface` type.
mod recording;

pub use clip::ClipRegion;
pub use recording::{DrawCommand, DrawKind, RecordingSurface};

/// Something that can be painted upon.
///
/// `Surface`s are usually windows, images, or other buffers containing pixels that are modified
/// through some drawing API. The `Surface` trait provides the small common API that clip masks
/// and shape painters need from it:
///
/// * A stack of painting states. `save()` pushes a copy of the current transform, clip and
///   paint settings and `restore()` pops it again. Prefer [`save_state`], which restores
///   the state when the returned guard is dropped.
/// * A current transform, mapping user space to device space. Every path handed to the
///   surface is interpreted in user space.
/// * A clip region, which restricts painting to its interior. See [`ClipOperation`] for how
///   a new clip path is combined with the existing region.
/// * Filling (and optionally stroking) paths with the current paint settings.
///
/// The trait is object safe; shapes paint onto a `&mut dyn Surface`.
pub trait Surface {
    /* State */

    /// Push a copy of the current painting state.
    fn save(&mut self);
    /// Pop the painting state pushed by the latest `save()`.
    ///
    /// This should be a no-op if there is no saved state.
    fn restore(&mut self);

    /* Transform Functions */

    /// The transform currently mapping user space onto the surface.
    fn transform(&self) -> Transform;
    /// Set the transform mapping user space onto the surface.
    ///
    /// If `combine` is true, `transform` is applied before the current transform instead of
    /// replacing it. This is what nested coordinate systems want.
    fn set_transform(&mut self, transform: Transform, combine: bool);

    /* Clipping Functions */

    /// The region painting is currently restricted to, in device space.
    fn clip_region(&self) -> &ClipRegion;
    /// Combine a user-space path with the clip region.
    fn set_clip_path(&mut self, path: PathSlice<'_>, op: ClipOperation) -> crate::Result;

    /* Painting Functions */

    /// Set the rule used to fill shapes.
    fn set_fill(&mut self, fill: FillRule) -> crate::Result;
    /// Set the color used to stroke outlines, or `None` to disable stroking.
    fn set_stroke(&mut self, stroke: Option<Color>) -> crate::Result;

    /// Fill in the area enclosed by a path using the current fill rule.
    fn fill_path(&mut self, path: PathSlice<'_>) -> crate::Result;
    /// Stroke the outline of a path using the current stroke color.
    #[inline]
    fn draw_path(&mut self, path: PathSlice<'_>) -> crate::Result {
        let _ = path;
        Err(crate::Error::NotSupported(crate::NotSupportedOp::Strokes))
    }
    /// Fill in a rectangle using the current fill rule.
    #[inline]
    fn fill_rect(&mut self, rect: &Rect<f32>) -> crate::Result {
        self.fill_path(rect_path(rect).as_slice())
    }
}

/// How a new clip path is combined with a surface's clip region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipOperation {
    /// Painting is no longer clipped.
    NoClip,
    /// The path replaces the current clip region.
    Replace,
    /// The new region is the intersection of the path and the current clip region.
    Intersect,
}

/// Save the painting state of `surface`, restoring it when the guard is dropped.
///
/// The guard dereferences to the surface, so painting goes through it.
#[inline]
pub fn save_state<S: Surface + ?Sized>(surface: &mut S) -> StateGuard<'_, S> {
    surface.save();
    StateGuard { surface }
}

/// A scope of saved painting state. See [`save_state`].
#[derive(Debug)]
pub struct StateGuard<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: Surface + ?Sized> Deref for StateGuard<'s, S> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<'s, S: Surface + ?Sized> DerefMut for StateGuard<'s, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<'s, S: Surface + ?Sized> Drop for StateGuard<'s, S> {
    #[inline]
    fn drop(&mut self) {
        self.surface.restore();
    }
}
