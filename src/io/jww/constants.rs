//! Constants and magic bytes for the JWW file format.

/// Standard 3-byte drawing magic.
pub const MAGIC_STANDARD: [u8; 3] = *b"JWW";

/// Standard 3-byte symbol/template magic.
pub const MAGIC_SYMBOL: [u8; 3] = *b"JWS";

/// Prefix of the legacy 7-byte preamble.
pub const LEGACY_PREFIX: [u8; 3] = *b"Jww";

/// Continuation of the legacy preamble; one separator byte follows it.
pub const LEGACY_CONTINUATION: [u8; 4] = *b"Data";

/// The header record always occupies this stride from the start of the
/// buffer; bytes past the decoded fields are reserved padding.
pub const HEADER_STRIDE: usize = 256;

/// Fixed width of one layer table record.
pub const LAYER_RECORD_LEN: usize = 36;

/// Fixed width of the legacy-text name field in a layer record.
pub const LAYER_NAME_LEN: usize = 32;

/// Fixed width of the font name field in a text record.
pub const FONT_NAME_LEN: usize = 32;

/// Tag search stops once this few bytes (or fewer) remain.
pub const MIN_RECORD_REMAINING: usize = 4;

/// Width of the block skipped past a record with an unrecognized tag.
pub const UNKNOWN_TAG_SKIP: usize = 32;

/// Width of the skip used to resynchronize the stream after a record
/// fails to decode.
pub const RECOVERY_SKIP: usize = 16;

/// Entity record tags.
pub mod tags {
    /// Logical end of the entity stream.
    pub const TERMINATOR: u8 = 0x00;
    pub const LINE: u8 = 0x01;
    pub const CIRCLE: u8 = 0x02;
    pub const ARC: u8 = 0x03;
    pub const TEXT: u8 = 0x04;
    pub const ELLIPSE: u8 = 0x05;
    pub const DIMENSION: u8 = 0x06;
    pub const POLYLINE: u8 = 0x07;
    pub const POINT: u8 = 0x08;
    pub const SOLID: u8 = 0x09;
    pub const HATCH: u8 = 0x0A;
    pub const BLOCK: u8 = 0x0B;
}
