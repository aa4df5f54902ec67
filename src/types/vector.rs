//! Vector types for geometric operations
//!
//! JWW drawings are strictly planar, so the library only carries a 2D
//! vector type.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector2 = Vector2::new(1.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector2 = Vector2::new(0.0, 1.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Calculate the squared length (avoids sqrt for performance)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize the vector (make it unit length)
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Vector2::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance to another vector
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*other - *self).length()
    }

    /// Angle of the vector from the positive X axis, in radians
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The vector rotated counterclockwise by `radians` around the origin
    pub fn rotated(&self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}
