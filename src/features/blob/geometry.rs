//! Plain 2D point type used by the blob generator
//!
//! The generator works in `f64` and only converts to the renderer's `f32`
//! points at the draw boundary.

use std::ops::{Add, Div, Mul, Sub};

/// A point (or vector) in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[cfg(test)]
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle` (radians)
    pub fn polar(center: Point2, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Euclidean distance to another point
    #[cfg(test)]
    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }

    /// Length when treated as a vector
    #[cfg(test)]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Uniform scale about `center`
    pub fn scale_about(self, center: Point2, scale: f64) -> Self {
        center + (self - center) * scale
    }

    /// Approximate equality with an absolute tolerance per axis
    #[cfg(test)]
    pub fn approx_eq(self, other: Point2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
