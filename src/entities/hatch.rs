//! Hatch entity

use super::EntityCommon;
use crate::types::Vector2;

/// A hatched region bounded by a closed polygon
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Hatch pattern index
    pub pattern: u8,
    /// Boundary polygon points in record order (mm)
    pub boundary: Vec<Vector2>,
}

impl Hatch {
    /// Create an empty hatch
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hatch from a boundary polygon
    pub fn from_boundary(pattern: u8, boundary: Vec<Vector2>) -> Self {
        Hatch {
            pattern,
            boundary,
            ..Self::new()
        }
    }

    /// Number of boundary points
    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }
}
