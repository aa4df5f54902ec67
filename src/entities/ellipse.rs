//! Ellipse entity

use super::EntityCommon;
use crate::types::Vector2;

/// An axis-aligned ellipse rotated by a fixed angle around its center
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (mm)
    pub center: Vector2,
    /// Radius along the X axis before rotation (mm)
    pub radius_x: f64,
    /// Radius along the Y axis before rotation (mm)
    pub radius_y: f64,
    /// Rotation of the axes in radians
    pub rotation: f64,
}

impl Ellipse {
    /// Create a new unit ellipse at the origin
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            radius_x: 1.0,
            radius_y: 1.0,
            rotation: 0.0,
        }
    }

    /// Create an ellipse from center and radii
    pub fn from_center_radii(center: Vector2, radius_x: f64, radius_y: f64) -> Self {
        Ellipse {
            center,
            radius_x,
            radius_y,
            ..Self::new()
        }
    }

    /// Whether both radii are equal (the ellipse degenerates to a circle)
    pub fn is_circular(&self) -> bool {
        self.radius_x == self.radius_y
    }

    /// Get the area
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius_x * self.radius_y
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ellipse_creation() {
        let ellipse = Ellipse::new();
        assert!(ellipse.is_circular());
        assert_eq!(ellipse.rotation, 0.0);
    }

    #[test]
    fn test_area() {
        let ellipse = Ellipse::from_center_radii(Vector2::ZERO, 3.0, 2.0);
        assert!(!ellipse.is_circular());
        assert!((ellipse.area() - 6.0 * PI).abs() < 1e-12);
    }
}
