//! Point entity

use super::EntityCommon;
use crate::types::Vector2;

/// A point marker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location (mm)
    pub location: Vector2,
}

impl Point {
    /// Create a point at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a point at a location
    pub fn at(location: Vector2) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let p = Point::at(Vector2::new(2.0, 3.0));
        assert_eq!(p.location, Vector2::new(2.0, 3.0));
        assert_eq!(Point::new().location, Vector2::ZERO);
    }
}
