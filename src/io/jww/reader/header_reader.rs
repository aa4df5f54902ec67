//! Fixed-layout file header decoder.
//!
//! The header occupies the first 256 bytes of every file regardless of
//! how many bytes its fields actually use; the remainder is reserved
//! padding. Field layout after the magic:
//!
//! version (u16), 1 reserved byte, scale numerator/denominator (i32
//! each), origin offset X/Y (i32 hundredths-mm each), rotation (i16
//! degrees), 2 reserved bytes, layer count (u8), group count (u8),
//! padding to the 256-byte stride.

use crate::document::{JwwHeader, Signature};
use crate::error::{JwwError, Result};
use crate::types::Vector2;

use super::super::constants::{
    HEADER_STRIDE, LEGACY_CONTINUATION, LEGACY_PREFIX, MAGIC_STANDARD, MAGIC_SYMBOL,
};
use super::super::cursor::JwwCursor;
use super::super::{defaults, units};

/// Header fields as stored, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHeader {
    pub signature: Signature,
    pub version: u16,
    pub scale_numerator: i32,
    pub scale_denominator: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub angle: i16,
    pub layer_count: u8,
    pub group_count: u8,
}

impl RawHeader {
    /// Apply the default table and unit conversions, producing the
    /// header the rest of the decode works with.
    pub fn normalize(&self) -> JwwHeader {
        JwwHeader {
            signature: self.signature,
            version: self.version,
            scale: defaults::scale(self.scale_numerator, self.scale_denominator),
            offset: Vector2::new(
                units::length_to_mm(self.offset_x),
                units::length_to_mm(self.offset_y),
            ),
            angle: units::angle_to_radians(self.angle),
            layer_count: defaults::table_count(self.layer_count),
            group_count: defaults::table_count(self.group_count),
        }
    }
}

/// Match the magic at the cursor and classify the file.
///
/// The 3-byte magics are accepted directly. The legacy form is the
/// `Jww` prefix followed by the `Data` continuation and one separator
/// byte, which is skipped without validation.
pub fn read_signature(cursor: &mut JwwCursor<'_>) -> Result<Signature> {
    let prefix = cursor.read_bytes(3)?;

    if prefix == MAGIC_STANDARD {
        return Ok(Signature::Standard);
    }
    if prefix == MAGIC_SYMBOL {
        return Ok(Signature::Symbol);
    }
    if prefix == LEGACY_PREFIX {
        let continuation = cursor.read_bytes(4)?;
        if continuation == LEGACY_CONTINUATION {
            cursor.skip(1)?;
            return Ok(Signature::Legacy);
        }
        let mut preamble = prefix.to_vec();
        preamble.extend_from_slice(continuation);
        return Err(JwwError::Signature(format!(
            "unsupported preamble {}",
            String::from_utf8_lossy(&preamble)
        )));
    }

    Err(JwwError::Signature(format!(
        "unsupported magic {}",
        String::from_utf8_lossy(&prefix)
    )))
}

/// Decode the header record. Every failure past the signature is
/// fatal for the whole read; the caller wraps it accordingly.
pub fn read_header(cursor: &mut JwwCursor<'_>) -> Result<RawHeader> {
    let signature = read_signature(cursor)?;

    let version = cursor.read_u16()?;
    cursor.skip(1)?;

    let scale_numerator = cursor.read_i32()?;
    let scale_denominator = cursor.read_i32()?;

    let offset_x = cursor.read_i32()?;
    let offset_y = cursor.read_i32()?;

    let angle = cursor.read_i16()?;
    cursor.skip(2)?;

    let layer_count = cursor.read_u8()?;
    let group_count = cursor.read_u8()?;

    // Whatever the fields consumed, the record occupies the full stride
    cursor.align(HEADER_STRIDE)?;

    Ok(RawHeader {
        signature,
        version,
        scale_numerator,
        scale_denominator,
        offset_x,
        offset_y,
        angle,
        layer_count,
        group_count,
    })
}
