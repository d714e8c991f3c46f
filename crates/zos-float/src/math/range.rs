//! Clamp ranges for pointer coordinates and displacements

use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` used to clamp a scalar.
///
/// Unlike [`f32::clamp`], an inverted range (`min > max`) is legal: the
/// minimum wins. This happens whenever the minimum window size does not fit
/// in the space left before the container edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f32,
    pub max: f32,
}

impl ClampRange {
    /// Create a new range
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range, honoring `min` when the range is inverted
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        value.min(self.max).max(self.min)
    }

    /// Whether the range is inverted
    #[inline]
    pub fn is_inverted(self) -> bool {
        self.min > self.max
    }
}

/// Independent clamp ranges for both axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClampRange2D {
    pub x: ClampRange,
    pub y: ClampRange,
}

impl ClampRange2D {
    /// Create a new 2D range
    #[inline]
    pub const fn new(x: ClampRange, y: ClampRange) -> Self {
        Self { x, y }
    }
}
