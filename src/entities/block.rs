//! Block insert entity

use super::EntityCommon;
use crate::types::Vector2;

/// A reference placing a named block at a position with scale and
/// rotation
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInsert {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (mm)
    pub insert: Vector2,
    /// Scale factor along X (1.0 = unscaled)
    pub scale_x: f64,
    /// Scale factor along Y (1.0 = unscaled)
    pub scale_y: f64,
    /// Rotation in radians
    pub rotation: f64,
    /// Name of the referenced block
    pub name: String,
}

impl BlockInsert {
    /// Create an unscaled, unrotated insert at the origin
    pub fn new() -> Self {
        BlockInsert {
            common: EntityCommon::new(),
            insert: Vector2::ZERO,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            name: String::new(),
        }
    }

    /// Create an insert of a named block at a position
    pub fn from_name(insert: Vector2, name: impl Into<String>) -> Self {
        BlockInsert {
            insert,
            name: name.into(),
            ..Self::new()
        }
    }

    /// Whether the insert applies no scaling
    pub fn is_unscaled(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0
    }
}

impl Default for BlockInsert {
    fn default() -> Self {
        Self::new()
    }
}
