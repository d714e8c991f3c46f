//! 2D vector type for pointer positions and displacements

use serde::{Deserialize, Serialize};

/// 2D vector for pointer positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`
    #[inline]
    pub fn displacement_from(self, origin: Vec2) -> Vec2 {
        self - origin
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_sub() {
        let a = Vec2::new(100.0, 40.0);
        let b = Vec2::new(30.0, -10.0);

        let sum = a + b;
        assert!((sum.x - 130.0).abs() < 0.001);
        assert!((sum.y - 30.0).abs() < 0.001);

        let diff = a - b;
        assert!((diff.x - 70.0).abs() < 0.001);
        assert!((diff.y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_displacement_from() {
        let start = Vec2::new(300.0, 175.0);
        let now = Vec2::new(250.0, 200.0);
        let d = now.displacement_from(start);
        assert!((d.x - (-50.0)).abs() < 0.001);
        assert!((d.y - 25.0).abs() < 0.001);
        assert_eq!(-d, start.displacement_from(now));
    }
}
