//! JWW document structure

use std::fmt;

use crate::entities::Entity;
use crate::notification::NotificationCollection;
use crate::tables::Layer;
use crate::types::Vector2;

/// Which magic class a file was recognized by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// The 3-byte `JWW` drawing magic
    Standard,
    /// The 3-byte `JWS` symbol/template magic
    Symbol,
    /// The legacy 7-byte `Jww` + `Data` preamble
    Legacy,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "JWW"),
            Self::Symbol => write!(f, "JWS"),
            Self::Legacy => write!(f, "JwwData"),
        }
    }
}

/// Decoded file header, already normalized to real units and effective
/// defaults
#[derive(Debug, Clone, PartialEq)]
pub struct JwwHeader {
    /// Magic class the file was recognized by
    pub signature: Signature,
    /// Format version
    pub version: u16,
    /// Drawing scale ratio (1.0 when the stored denominator is 0)
    pub scale: f64,
    /// Drawing origin offset (mm)
    pub offset: Vector2,
    /// Drawing rotation (radians)
    pub angle: f64,
    /// Number of layer table entries (16 when the stored count is 0)
    pub layer_count: u8,
    /// Number of entity groups (16 when the stored count is 0)
    pub group_count: u8,
}

/// A fully decoded JWW document: header, layer table, entity stream,
/// and the diagnostics collected while reading.
///
/// The document is immutable once assembled; the entity order is the
/// record order of the source buffer, and the layer at index `n`
/// describes layer number `n`.
#[derive(Debug, Clone)]
pub struct JwwDocument {
    /// Decoded file header
    pub header: JwwHeader,
    /// Layer table; always exactly `header.layer_count` entries
    pub layers: Vec<Layer>,
    /// Entities in stream order
    pub entities: Vec<Entity>,
    /// Recoverable issues encountered while reading
    pub notifications: NotificationCollection,
}

impl JwwDocument {
    /// Look up a layer by number.
    pub fn layer(&self, number: u8) -> Option<&Layer> {
        self.layers.get(number as usize)
    }

    /// Whether entities on the given layer should be drawn. Entities
    /// referencing a layer outside the table are treated as visible.
    pub fn is_layer_visible(&self, number: u8) -> bool {
        self.layer(number).map_or(true, |layer| layer.visible)
    }

    /// Iterate over the entities on one layer.
    pub fn entities_on_layer(&self, number: u8) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.layer() == number)
    }

    /// Total number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
