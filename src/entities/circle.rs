//! Circle entity

use super::EntityCommon;
use crate::types::Vector2;

/// A circle entity defined by a center point and radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (mm)
    pub center: Vector2,
    /// Radius (mm)
    pub radius: f64,
}

impl Circle {
    /// Create a new unit circle at the origin
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            radius: 1.0,
        }
    }

    /// Create a new circle with center and radius
    pub fn from_center_radius(center: Vector2, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }

    /// Get the circumference
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Get the area
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Check whether a point lies inside or on the circle
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.center.distance(&point) <= self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}
