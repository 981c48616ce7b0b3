// MIT/Apache2 License

use crate::Color;

/// Defines how a particular space is filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Nothing is painted.
    NoFill,
    /// The space is filled with a single color.
    SolidColor(Color),
}

impl Default for FillRule {
    #[inline]
    fn default() -> Self {
        FillRule::SolidColor(Color::BLACK)
    }
}

impl From<Color> for FillRule {
    #[inline]
    fn from(color: Color) -> Self {
        FillRule::SolidColor(color)
    }
}
