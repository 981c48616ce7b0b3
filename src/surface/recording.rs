// MIT/Apache2 License

//! A software surface that records what is painted on it instead of rasterizing it.

use super::{ClipOperation, ClipRegion, Surface};
use crate::{
    geometry::{transform_path, winding_number, DEFAULT_TOLERANCE},
    Color, FillRule, Transform,
};
use lyon_geom::Point;
use lyon_path::{Path, PathSlice};
use tinyvec::TinyVec;

/// The painting state saved and restored by `save()` and `restore()`.
#[derive(Debug, Clone)]
struct SurfaceState {
    transform: Transform,
    clip: ClipRegion,
    fill: FillRule,
    stroke: Option<Color>,
}

impl Default for SurfaceState {
    #[inline]
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip: ClipRegion::unbounded(),
            fill: FillRule::default(),
            stroke: None,
        }
    }
}

/// What a [`DrawCommand`] painted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// The inside of the path was filled.
    Fill(FillRule),
    /// The outline of the path was stroked.
    Stroke(Color),
}

/// A single painting operation recorded by a [`RecordingSurface`].
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// How the path was painted.
    pub kind: DrawKind,
    /// The painted path, already mapped into device space.
    pub path: Path,
    /// The transform that was active when the path was painted.
    pub transform: Transform,
    /// The clip region that was active when the path was painted.
    pub clip: ClipRegion,
}

impl DrawCommand {
    /// Tell if this command covers a device-space point, taking the clip into account.
    ///
    /// Strokes are treated as hairlines and never cover anything.
    pub fn covers(&self, point: Point<f32>, tolerance: f32) -> bool {
        match self.kind {
            DrawKind::Fill(FillRule::SolidColor(_)) => {
                self.clip.contains_with_tolerance(point, tolerance)
                    && winding_number(self.path.as_slice(), point, tolerance) != 0
            }
            _ => false,
        }
    }
}

/// A [`Surface`] that keeps a log of every fill and stroke along with the transform and clip
/// region in effect at the time.
///
/// This is useful for testing painting code, and for hosts that replay the painting onto
/// their own rasterizer later.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    state: SurfaceState,
    saved: TinyVec<[SurfaceState; 4]>,
    commands: Vec<DrawCommand>,
    tolerance: f32,
    strokes: bool,
}

impl Default for RecordingSurface {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create a new, empty `RecordingSurface`.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: SurfaceState::default(),
            saved: TinyVec::default(),
            commands: Vec::new(),
            tolerance: DEFAULT_TOLERANCE,
            strokes: true,
        }
    }

    /// Use a different tolerance for flattening curves when hit-testing.
    #[inline]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Refuse to stroke paths, like a surface without outline support.
    #[inline]
    pub fn without_strokes(mut self) -> Self {
        self.strokes = false;
        self
    }

    /// The commands recorded so far, oldest first.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands out of the surface.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The number of states currently saved.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// The fill rule of the topmost fill covering a device-space point, if any.
    pub fn painted_at(&self, point: Point<f32>) -> Option<FillRule> {
        self.commands
            .iter()
            .rev()
            .find(|command| command.covers(point, self.tolerance))
            .and_then(|command| match command.kind {
                DrawKind::Fill(fill) => Some(fill),
                DrawKind::Stroke(_) => None,
            })
    }

    #[inline]
    fn record(&mut self, kind: DrawKind, path: PathSlice<'_>) {
        log::trace!("Recording {:?} with transform {:?}", kind, self.state.transform);
        self.commands.push(DrawCommand {
            kind,
            path: transform_path(path, &self.state.transform),
            transform: self.state.transform,
            clip: self.state.clip.clone(),
        });
    }
}

impl Surface for RecordingSurface {
    #[inline]
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    #[inline]
    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::debug!("restore() called without a matching save()"),
        }
    }

    #[inline]
    fn transform(&self) -> Transform {
        self.state.transform
    }

    #[inline]
    fn set_transform(&mut self, transform: Transform, combine: bool) {
        self.state.transform = if combine {
            transform.then(&self.state.transform)
        } else {
            transform
        };
    }

    #[inline]
    fn clip_region(&self) -> &ClipRegion {
        &self.state.clip
    }

    fn set_clip_path(&mut self, path: PathSlice<'_>, op: ClipOperation) -> crate::Result {
        let device_path = transform_path(path, &self.state.transform);
        match op {
            ClipOperation::NoClip => self.state.clip = ClipRegion::unbounded(),
            ClipOperation::Replace => self.state.clip = ClipRegion::from_path(device_path),
            ClipOperation::Intersect => self.state.clip.intersect(device_path),
        }
        Ok(())
    }

    #[inline]
    fn set_fill(&mut self, fill: FillRule) -> crate::Result {
        self.state.fill = fill;
        Ok(())
    }

    #[inline]
    fn set_stroke(&mut self, stroke: Option<Color>) -> crate::Result {
        self.state.stroke = stroke;
        Ok(())
    }

    fn fill_path(&mut self, path: PathSlice<'_>) -> crate::Result {
        if let FillRule::NoFill = self.state.fill {
            return Ok(());
        }
        self.record(DrawKind::Fill(self.state.fill), path);
        Ok(())
    }

    fn draw_path(&mut self, path: PathSlice<'_>) -> crate::Result {
        if !self.strokes {
            return Err(crate::Error::NotSupported(crate::NotSupportedOp::Strokes));
        }
        if let Some(color) = self.state.stroke {
            self.record(DrawKind::Stroke(color), path);
        }
        Ok(())
    }
}
