use core::ops::{Add, Mul, Sub};

/// 2D point or offset in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from the origin, `angle` radians clockwise from the
    /// top of the circle.
    ///
    /// This is the convention every angle in the engine uses; see the module
    /// docs. Used for arc endpoints and info-line turning points.
    #[inline]
    pub fn polar(angle: f32, radius: f32) -> Self {
        Self {
            x: angle.sin() * radius,
            y: -angle.cos() * radius,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_top_is_straight_up() {
        let p = Vec2::polar(0.0, 10.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y + 10.0).abs() < 1e-5);
    }

    #[test]
    fn polar_quarter_turn_points_right() {
        let p = Vec2::polar(core::f32::consts::FRAC_PI_2, 10.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn polar_negative_angle_points_left() {
        let p = Vec2::polar(-core::f32::consts::FRAC_PI_2, 10.0);
        assert!((p.x + 10.0).abs() < 1e-5);
    }
}
