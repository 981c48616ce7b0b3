// MIT/Apache2 License

use crate::intensity::Intensity;

/// A four-element color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
    a: Intensity,
}

impl Color {
    pub const WHITE: Color = unsafe { Color::new_unchecked(1.0, 1.0, 1.0, 1.0) };
    pub const BLACK: Color = unsafe { Color::new_unchecked(0.0, 0.0, 0.0, 1.0) };

    /// Create a new color.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if any of the elements are NaN or outside of [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: Intensity::new_unchecked(r),
            g: Intensity::new_unchecked(g),
            b: Intensity::new_unchecked(b),
            a: Intensity::new_unchecked(a),
        }
    }

    /// Creates a new color. This function returns `None` if any of the elements are NaN or out
    /// of range.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Option<Self> {
        Some(Self {
            r: Intensity::new(r)?,
            g: Intensity::new(g)?,
            b: Intensity::new(b)?,
            a: Intensity::new(a)?,
        })
    }
}
