//! Layer table entry

use bitflags::bitflags;

bitflags! {
    /// Per-layer state bits as stored in the layer table record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: u8 {
        /// Layer is drawn.
        const VISIBLE = 0b0000_0001;
        /// Layer is locked against editing.
        const LOCKED = 0b0000_0010;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer number; matches the entry's position in the table
    pub number: u8,
    /// Layer name
    pub name: String,
    /// Layer is drawn
    pub visible: bool,
    /// Layer is locked against editing
    pub locked: bool,
    /// Default color index (0-255)
    pub color: u8,
    /// Default line-type index
    pub line_type: u8,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(number: u8, name: impl Into<String>) -> Self {
        Layer {
            number,
            name: name.into(),
            visible: true,
            locked: false,
            color: 0,
            line_type: 0,
        }
    }

    /// The default record substituted for a slot that failed to decode:
    /// visible, unlocked, color 0, line type 0, synthesized name.
    pub fn default_for(number: u8) -> Self {
        Self::new(number, format!("Layer {number}"))
    }

    /// Apply a stored flags byte (bit 0 = visible, bit 1 = locked).
    pub fn with_flags(mut self, flags: LayerFlags) -> Self {
        self.visible = flags.contains(LayerFlags::VISIBLE);
        self.locked = flags.contains(LayerFlags::LOCKED);
        self
    }

    /// The flags byte equivalent of this layer's state.
    pub fn flags(&self) -> LayerFlags {
        let mut flags = LayerFlags::empty();
        if self.visible {
            flags |= LayerFlags::VISIBLE;
        }
        if self.locked {
            flags |= LayerFlags::LOCKED;
        }
        flags
    }
}
