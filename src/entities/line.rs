//! Line entity

use super::EntityCommon;
use crate::types::Vector2;

/// A line entity defined by two endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line (mm)
    pub start: Vector2,
    /// End point of the line (mm)
    pub end: Vector2,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
        }
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector2, end: Vector2) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Create a new line from coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::from_points(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the direction vector (normalized)
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    /// Get the midpoint of the line
    pub fn midpoint(&self) -> Vector2 {
        (self.start + self.end) / 2.0
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}
