//! JWW entity types
//!
//! Every record in the entity stream shares a common attribute block
//! ([`EntityCommon`]) followed by a tag-specific payload. The decoded
//! payloads are modeled as one struct per kind, gathered into the
//! closed [`Entity`] enum; the record tag chooses the variant at decode
//! time and is never reinterpreted afterwards.

pub mod arc;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod hatch;
pub mod line;
pub mod point;
pub mod polyline;
pub mod solid;
pub mod text;

pub use arc::{Arc, ArcFlags};
pub use block::BlockInsert;
pub use circle::Circle;
pub use dimension::{Dimension, DimensionType};
pub use ellipse::Ellipse;
pub use hatch::Hatch;
pub use line::Line;
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags};
pub use solid::Solid;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};

/// Attributes shared by every entity record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntityCommon {
    /// Layer number the entity belongs to
    pub layer: u8,
    /// Color index (0-255)
    pub color: u8,
    /// Line-type index
    pub line_type: u8,
    /// Line width in millimeters
    pub line_width: f64,
    /// Group index
    pub group: u8,
}

impl EntityCommon {
    /// Create a common block with all attributes zeroed.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A decoded entity: one closed variant per supported record kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    Text(Text),
    Dimension(Dimension),
    Point(Point),
    Solid(Solid),
    Hatch(Hatch),
    Polyline(Polyline),
    Block(BlockInsert),
}

impl Entity {
    /// The shared attribute block of this entity.
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Line(e) => &e.common,
            Entity::Circle(e) => &e.common,
            Entity::Arc(e) => &e.common,
            Entity::Ellipse(e) => &e.common,
            Entity::Text(e) => &e.common,
            Entity::Dimension(e) => &e.common,
            Entity::Point(e) => &e.common,
            Entity::Solid(e) => &e.common,
            Entity::Hatch(e) => &e.common,
            Entity::Polyline(e) => &e.common,
            Entity::Block(e) => &e.common,
        }
    }

    /// Layer number the entity belongs to.
    pub fn layer(&self) -> u8 {
        self.common().layer
    }

    /// Color index of the entity.
    pub fn color(&self) -> u8 {
        self.common().color
    }

    /// Group index of the entity.
    pub fn group(&self) -> u8 {
        self.common().group
    }

    /// Uppercase kind name, useful for listings and diagnostics.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Circle(_) => "CIRCLE",
            Entity::Arc(_) => "ARC",
            Entity::Ellipse(_) => "ELLIPSE",
            Entity::Text(_) => "TEXT",
            Entity::Dimension(_) => "DIMENSION",
            Entity::Point(_) => "POINT",
            Entity::Solid(_) => "SOLID",
            Entity::Hatch(_) => "HATCH",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Block(_) => "BLOCK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector2;

    #[test]
    fn test_common_accessors() {
        let mut line = Line::from_points(Vector2::ZERO, Vector2::UNIT_X);
        line.common.layer = 5;
        line.common.color = 2;
        line.common.group = 9;

        let entity = Entity::Line(line);
        assert_eq!(entity.layer(), 5);
        assert_eq!(entity.color(), 2);
        assert_eq!(entity.group(), 9);
        assert_eq!(entity.entity_type(), "LINE");
    }

    #[test]
    fn test_entity_type_names() {
        let circle = Entity::Circle(Circle::from_center_radius(Vector2::ZERO, 1.0));
        assert_eq!(circle.entity_type(), "CIRCLE");

        let point = Entity::Point(Point::at(Vector2::ZERO));
        assert_eq!(point.entity_type(), "POINT");
    }
}
