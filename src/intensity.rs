// MIT/Apache2 License

use ordered_float::NotNan;

/// A value that goes from zero to one, defining the intensity of a color channel. This type is
/// essentially a wrapper around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    pub const ONE: Intensity = unsafe { Intensity::new_unchecked(1.0) };

    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: NotNan::new_unchecked(inner),
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above,
    /// this function returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if inner.is_nan() || !(0.0..=1.0).contains(&inner) {
            None
        } else {
            Some(Self {
                inner: NotNan::new(inner).ok()?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Intensity;

    #[test]
    fn rejects_out_of_range() {
        assert!(Intensity::new(f32::NAN).is_none());
        assert!(Intensity::new(-0.1).is_none());
        assert!(Intensity::new(1.5).is_none());
        assert_eq!(Intensity::new(1.0), Some(Intensity::ONE));
    }
}
