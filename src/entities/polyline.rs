//! Polyline entity

use super::EntityCommon;
use crate::types::Vector2;
use bitflags::bitflags;

bitflags! {
    /// Polyline record flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u8 {
        /// The last point connects back to the first.
        const CLOSED = 0b0000_0001;
    }
}

/// A connected sequence of line segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices in record order (mm)
    pub points: Vec<Vector2>,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl Polyline {
    /// Create an empty open polyline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polyline from a vertex list
    pub fn from_points(points: Vec<Vector2>, closed: bool) -> Self {
        Polyline {
            points,
            closed,
            ..Self::new()
        }
    }

    /// Append a vertex
    pub fn add_point(&mut self, point: Vector2) {
        self.points.push(point);
    }

    /// Number of drawn segments
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Total length of all segments (mm)
    pub fn total_length(&self) -> f64 {
        let mut length: f64 = self
            .points
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum();
        if self.closed {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                length += last.distance(first);
            }
        }
        length
    }
}
