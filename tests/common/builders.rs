//! JWW byte-buffer builders — consolidated from the individual test
//! files.
//!
//! [`JwwFileBuilder`] fabricates format-conformant buffers: a 256-byte
//! header, exactly `layer_count` 36-byte layer records, and a sequence
//! of tagged entity records. Tests drive the decoder end-to-end against
//! these buffers, so the encoding here must stay bit-exact with the
//! layout the decoder expects.

#![allow(dead_code)]

use jwwrust::io::jww::units;

/// Header stride in bytes.
pub const HEADER_STRIDE: usize = 256;

/// Width of one layer record in bytes.
pub const LAYER_RECORD_LEN: usize = 36;

/// Builder for fabricated JWW buffers.
pub struct JwwFileBuilder {
    magic: Vec<u8>,
    version: u16,
    scale: (i32, i32),
    offset: (i32, i32),
    angle: i16,
    layer_count: u8,
    group_count: u8,
    layer_records: Vec<u8>,
    layers_added: usize,
    entity_records: Vec<u8>,
    // Common block applied to subsequently added entities
    layer: u8,
    color: u8,
    line_type: u8,
    line_width: u16,
    group: u8,
}

impl JwwFileBuilder {
    /// Start a buffer with the standard `JWW` magic and one layer.
    pub fn new() -> Self {
        Self {
            magic: b"JWW".to_vec(),
            version: 700,
            scale: (1, 1),
            offset: (0, 0),
            angle: 0,
            layer_count: 1,
            group_count: 1,
            layer_records: Vec::new(),
            layers_added: 0,
            entity_records: Vec::new(),
            layer: 0,
            color: 1,
            line_type: 0,
            line_width: 0,
            group: 0,
        }
    }

    /// Start a buffer with the `JWS` symbol magic.
    pub fn symbol() -> Self {
        let mut builder = Self::new();
        builder.magic = b"JWS".to_vec();
        builder
    }

    /// Start a buffer with the legacy `JwwData.` preamble.
    pub fn legacy() -> Self {
        let mut builder = Self::new();
        builder.magic = b"JwwData.".to_vec();
        builder
    }

    // -- header ----------------------------------------------------------

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn scale(mut self, numerator: i32, denominator: i32) -> Self {
        self.scale = (numerator, denominator);
        self
    }

    /// Origin offset, given as the raw fixed-point values.
    pub fn offset_raw(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Rotation, given as the raw fixed-point degrees.
    pub fn angle_raw(mut self, degrees: i16) -> Self {
        self.angle = degrees;
        self
    }

    pub fn counts(mut self, layer_count: u8, group_count: u8) -> Self {
        self.layer_count = layer_count;
        self.group_count = group_count;
        self
    }

    // -- layer table -----------------------------------------------------

    /// Append an encoded layer record. Slots not filled explicitly are
    /// padded with visible, unnamed records at build time.
    pub fn layer(mut self, flags: u8, color: u8, line_type: u8, name: &str) -> Self {
        self.layer_records.extend_from_slice(&[flags, color, line_type, 0]);
        let mut name_field = name.as_bytes().to_vec();
        name_field.resize(32, 0);
        self.layer_records.extend_from_slice(&name_field);
        self.layers_added += 1;
        self
    }

    // -- entity records --------------------------------------------------

    /// Set the layer subsequently added entities are placed on.
    pub fn on_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    /// Set the line width (raw hundredths-mm) of subsequent entities.
    pub fn with_line_width(mut self, raw: u16) -> Self {
        self.line_width = raw;
        self
    }

    fn push_common(&mut self, tag: u8) {
        self.entity_records.push(tag);
        self.entity_records.push(self.layer);
        self.entity_records.push(self.color);
        self.entity_records.push(self.line_type);
        self.entity_records
            .extend_from_slice(&self.line_width.to_le_bytes());
        self.entity_records.push(self.group);
        self.entity_records.push(0);
    }

    fn push_coord(&mut self, mm: f64) {
        self.entity_records
            .extend_from_slice(&units::mm_to_length(mm).to_le_bytes());
    }

    fn push_angle(&mut self, radians: f64) {
        self.entity_records
            .extend_from_slice(&units::radians_to_angle(radians).to_le_bytes());
    }

    pub fn line(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.push_common(0x01);
        for mm in [x1, y1, x2, y2] {
            self.push_coord(mm);
        }
        self
    }

    pub fn circle(mut self, cx: f64, cy: f64, radius: f64) -> Self {
        self.push_common(0x02);
        for mm in [cx, cy, radius] {
            self.push_coord(mm);
        }
        self
    }

    pub fn arc(
        mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        clockwise: bool,
    ) -> Self {
        self.push_common(0x03);
        for mm in [cx, cy, radius] {
            self.push_coord(mm);
        }
        self.push_angle(start);
        self.push_angle(end);
        self.entity_records.push(clockwise as u8);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        mut self,
        x: f64,
        y: f64,
        height: f64,
        width: f64,
        angle: f64,
        alignment: u8,
        font: &str,
        value: &str,
    ) -> Self {
        self.push_common(0x04);
        self.push_coord(x);
        self.push_coord(y);
        self.entity_records
            .extend_from_slice(&((height * 100.0).round() as i16).to_le_bytes());
        self.entity_records
            .extend_from_slice(&((width * 100.0).round() as i16).to_le_bytes());
        self.push_angle(angle);
        self.entity_records.push(alignment);
        let mut font_field = font.as_bytes().to_vec();
        font_field.resize(32, 0);
        self.entity_records.extend_from_slice(&font_field);
        self.entity_records
            .extend_from_slice(&(value.len() as u16).to_le_bytes());
        self.entity_records.extend_from_slice(value.as_bytes());
        self
    }

    pub fn ellipse(mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64) -> Self {
        self.push_common(0x05);
        for mm in [cx, cy, rx, ry] {
            self.push_coord(mm);
        }
        self.push_angle(rotation);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn dimension(
        mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        tx: f64,
        ty: f64,
        value: f64,
        dim_type: u8,
        text: &str,
    ) -> Self {
        self.push_common(0x06);
        for mm in [x1, y1, x2, y2, tx, ty] {
            self.push_coord(mm);
        }
        self.entity_records
            .extend_from_slice(&units::mm_to_dim_value(value).to_le_bytes());
        self.entity_records.push(dim_type);
        self.entity_records
            .extend_from_slice(&(text.len() as u16).to_le_bytes());
        self.entity_records.extend_from_slice(text.as_bytes());
        self
    }

    pub fn polyline(mut self, points: &[(f64, f64)], closed: bool) -> Self {
        self.push_common(0x07);
        self.entity_records
            .extend_from_slice(&(points.len() as u16).to_le_bytes());
        self.entity_records.push(closed as u8);
        self.entity_records.push(0);
        for &(x, y) in points {
            self.push_coord(x);
            self.push_coord(y);
        }
        self
    }

    pub fn point(mut self, x: f64, y: f64) -> Self {
        self.push_common(0x08);
        self.push_coord(x);
        self.push_coord(y);
        self
    }

    pub fn solid(mut self, corners: [(f64, f64); 4]) -> Self {
        self.push_common(0x09);
        for (x, y) in corners {
            self.push_coord(x);
            self.push_coord(y);
        }
        self
    }

    pub fn hatch(mut self, pattern: u8, boundary: &[(f64, f64)]) -> Self {
        self.push_common(0x0A);
        self.entity_records
            .extend_from_slice(&(boundary.len() as u16).to_le_bytes());
        self.entity_records.push(pattern);
        self.entity_records.push(0);
        for &(x, y) in boundary {
            self.push_coord(x);
            self.push_coord(y);
        }
        self
    }

    pub fn block(
        mut self,
        x: f64,
        y: f64,
        scale_x: f64,
        scale_y: f64,
        rotation: f64,
        name: &str,
    ) -> Self {
        self.push_common(0x0B);
        self.push_coord(x);
        self.push_coord(y);
        self.push_coord(scale_x);
        self.push_coord(scale_y);
        self.push_angle(rotation);
        self.entity_records
            .extend_from_slice(&(name.len() as u16).to_le_bytes());
        self.entity_records.extend_from_slice(name.as_bytes());
        self
    }

    /// Append a record with an unsupported tag and its 32-byte block.
    pub fn unknown(mut self, tag: u8) -> Self {
        self.push_common(tag);
        self.entity_records.extend_from_slice(&[0xEE; 32]);
        self
    }

    /// Append the stream terminator record.
    pub fn terminator(mut self) -> Self {
        self.push_common(0x00);
        self
    }

    /// Append raw bytes to the entity stream (for corruption tests).
    pub fn raw_entity_bytes(mut self, bytes: &[u8]) -> Self {
        self.entity_records.extend_from_slice(bytes);
        self
    }

    // -- assembly --------------------------------------------------------

    /// Encode the buffer.
    pub fn build(self) -> Vec<u8> {
        let mut data = Vec::new();

        data.extend_from_slice(&self.magic);
        data.extend_from_slice(&self.version.to_le_bytes());
        data.push(0);
        data.extend_from_slice(&self.scale.0.to_le_bytes());
        data.extend_from_slice(&self.scale.1.to_le_bytes());
        data.extend_from_slice(&self.offset.0.to_le_bytes());
        data.extend_from_slice(&self.offset.1.to_le_bytes());
        data.extend_from_slice(&self.angle.to_le_bytes());
        data.extend_from_slice(&[0, 0]);
        data.push(self.layer_count);
        data.push(self.group_count);
        data.resize(HEADER_STRIDE, 0);

        data.extend_from_slice(&self.layer_records);
        // Pad unfilled slots with visible, unnamed records so the
        // table width always matches the declared count
        let effective_count = if self.layer_count == 0 {
            16
        } else {
            self.layer_count as usize
        };
        for _ in self.layers_added..effective_count {
            data.push(0x01);
            data.extend_from_slice(&[0; LAYER_RECORD_LEN - 1]);
        }

        data.extend_from_slice(&self.entity_records);
        data
    }

    /// Encode the buffer, leaving unfilled layer slots unpadded.
    /// The entity stream follows immediately; used to fabricate
    /// truncated layer tables.
    pub fn build_without_layer_padding(self) -> Vec<u8> {
        let mut data = Vec::new();

        data.extend_from_slice(&self.magic);
        data.extend_from_slice(&self.version.to_le_bytes());
        data.push(0);
        data.extend_from_slice(&self.scale.0.to_le_bytes());
        data.extend_from_slice(&self.scale.1.to_le_bytes());
        data.extend_from_slice(&self.offset.0.to_le_bytes());
        data.extend_from_slice(&self.offset.1.to_le_bytes());
        data.extend_from_slice(&self.angle.to_le_bytes());
        data.extend_from_slice(&[0, 0]);
        data.push(self.layer_count);
        data.push(self.group_count);
        data.resize(HEADER_STRIDE, 0);

        data.extend_from_slice(&self.layer_records);
        data.extend_from_slice(&self.entity_records);
        data
    }
}

impl Default for JwwFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
