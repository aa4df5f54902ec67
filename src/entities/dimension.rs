//! Dimension entity

use super::EntityCommon;
use crate::types::Vector2;

/// Kind of measurement a dimension records, stored as a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionType {
    /// Distance projected onto an axis
    #[default]
    Linear,
    /// Distance along the measured segment
    Aligned,
    /// Angle between two directions
    Angular,
    /// Radius of a circle or arc
    Radius,
    /// Diameter of a circle or arc
    Diameter,
}

impl DimensionType {
    /// Decode the stored type byte. Out-of-range values fall back to
    /// `Linear`.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Aligned,
            2 => Self::Angular,
            3 => Self::Radius,
            4 => Self::Diameter,
            _ => Self::Linear,
        }
    }

    /// The stored byte for this type.
    pub fn to_raw(self) -> u8 {
        match self {
            Self::Linear => 0,
            Self::Aligned => 1,
            Self::Angular => 2,
            Self::Radius => 3,
            Self::Diameter => 4,
        }
    }
}

/// A dimension entity: a measured segment, a text anchor, the measured
/// value, and its display text
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Common entity data
    pub common: EntityCommon,
    /// Start of the measured segment (mm)
    pub start: Vector2,
    /// End of the measured segment (mm)
    pub end: Vector2,
    /// Anchor position of the dimension text (mm)
    pub text_position: Vector2,
    /// The measured value (mm)
    pub value: f64,
    /// Kind of measurement
    pub dimension_type: DimensionType,
    /// Display text; synthesized from the value when the record carries
    /// none
    pub text: String,
}

impl Dimension {
    /// Create an empty linear dimension
    pub fn new() -> Self {
        Dimension {
            common: EntityCommon::new(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
            text_position: Vector2::ZERO,
            value: 0.0,
            dimension_type: DimensionType::Linear,
            text: String::new(),
        }
    }

    /// Create a dimension measuring a segment
    pub fn from_segment(start: Vector2, end: Vector2, value: f64) -> Self {
        Dimension {
            start,
            end,
            value,
            ..Self::new()
        }
    }

    /// Length of the measured segment (mm); for angular dimensions this
    /// is the chord between the two direction points
    pub fn segment_length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_type_from_raw() {
        assert_eq!(DimensionType::from_raw(0), DimensionType::Linear);
        assert_eq!(DimensionType::from_raw(1), DimensionType::Aligned);
        assert_eq!(DimensionType::from_raw(2), DimensionType::Angular);
        assert_eq!(DimensionType::from_raw(3), DimensionType::Radius);
        assert_eq!(DimensionType::from_raw(4), DimensionType::Diameter);
    }

    #[test]
    fn test_dimension_type_out_of_range_falls_back_to_linear() {
        assert_eq!(DimensionType::from_raw(5), DimensionType::Linear);
        assert_eq!(DimensionType::from_raw(255), DimensionType::Linear);
    }

    #[test]
    fn test_dimension_type_raw_roundtrip() {
        for raw in 0..5u8 {
            assert_eq!(DimensionType::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn test_segment_length() {
        let dim = Dimension::from_segment(Vector2::ZERO, Vector2::new(3.0, 4.0), 5.0);
        assert_eq!(dim.segment_length(), 5.0);
        assert_eq!(dim.value, 5.0);
    }
}
