//! Arc entity

use super::EntityCommon;
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// Arc record flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ArcFlags: u8 {
        /// The arc sweeps clockwise from start to end angle.
        const CLOCKWISE = 0b0000_0001;
    }
}

/// An arc entity (portion of a circle)
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (mm)
    pub center: Vector2,
    /// Radius (mm)
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Sweep direction
    pub clockwise: bool,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector2::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::PI / 2.0,
            clockwise: false,
        }
    }

    /// Create a new arc with center, radius, and angles
    pub fn from_center_radius_angles(
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }

    /// Get the sweep angle (angular extent) in radians, always positive
    pub fn sweep_angle(&self) -> f64 {
        let mut sweep = if self.clockwise {
            self.start_angle - self.end_angle
        } else {
            self.end_angle - self.start_angle
        };
        if sweep < 0.0 {
            sweep += 2.0 * std::f64::consts::PI;
        }
        sweep
    }

    /// Get the arc length
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }

    /// Get the start point of the arc
    pub fn start_point(&self) -> Vector2 {
        self.point_at(self.start_angle)
    }

    /// Get the end point of the arc
    pub fn end_point(&self) -> Vector2 {
        self.point_at(self.end_angle)
    }

    fn point_at(&self, angle: f64) -> Vector2 {
        Vector2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}
