//! Bounds-checked little-endian cursor over a JWW buffer.
//!
//! All multi-byte values in the format are little-endian and
//! byte-aligned. The cursor owns a position into a borrowed, immutable
//! buffer; every read consumes exactly its fixed width or fails with
//! [`JwwError::Truncated`] without advancing. After a failed read the
//! caller must reposition explicitly before reading again.

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::Encoding;

use crate::error::{JwwError, Result};

/// Sequential reader over an immutable byte buffer.
pub struct JwwCursor<'a> {
    data: &'a [u8],
    position: usize,
    encoding: &'static Encoding,
}

impl<'a> JwwCursor<'a> {
    /// Create a cursor at the start of `data`, decoding legacy text as
    /// Shift_JIS.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_encoding(data, encoding_rs::SHIFT_JIS)
    }

    /// Create a cursor with an explicit legacy-text encoding.
    pub fn with_encoding(data: &'a [u8], encoding: &'static Encoding) -> Self {
        Self {
            data,
            position: 0,
            encoding,
        }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to an absolute byte position. Positions past the end clamp
    /// to the buffer length.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Whether the position has reached the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The legacy-text encoding in effect.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Consume `length` bytes and return them. The position only
    /// advances when the full width is available.
    fn take(&mut self, length: usize) -> Result<&'a [u8]> {
        if length > self.remaining() {
            return Err(JwwError::Truncated {
                offset: self.position,
                requested: length,
                length: self.data.len(),
            });
        }
        let bytes = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    /// Read an unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut bytes = self.take(2)?;
        Ok(bytes.read_u16::<LittleEndian>()?)
    }

    /// Read a little-endian i16.
    pub fn read_i16(&mut self) -> Result<i16> {
        let mut bytes = self.take(2)?;
        Ok(bytes.read_i16::<LittleEndian>()?)
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut bytes = self.take(4)?;
        Ok(bytes.read_u32::<LittleEndian>()?)
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut bytes = self.take(4)?;
        Ok(bytes.read_i32::<LittleEndian>()?)
    }

    /// Read a little-endian f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        let mut bytes = self.take(4)?;
        Ok(bytes.read_f32::<LittleEndian>()?)
    }

    /// Read a little-endian f64.
    pub fn read_f64(&mut self) -> Result<f64> {
        let mut bytes = self.take(8)?;
        Ok(bytes.read_f64::<LittleEndian>()?)
    }

    /// Read a raw byte range.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.take(length)
    }

    /// Read a fixed-width legacy-text field. The field is truncated at
    /// the first NUL byte, then decoded with the cursor's encoding.
    pub fn read_text(&mut self, length: usize) -> Result<String> {
        let bytes = self.take(length)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(length);
        let (decoded, _, _) = self.encoding.decode(&bytes[..end]);
        Ok(decoded.into_owned())
    }

    /// Read a NUL-terminated legacy-text field, consuming the
    /// terminator. Fails if no NUL occurs before the end of the buffer.
    pub fn read_text_nul(&mut self) -> Result<String> {
        let rest = &self.data[self.position..];
        let end = rest.iter().position(|&b| b == 0).ok_or(JwwError::Truncated {
            offset: self.position,
            requested: rest.len() + 1,
            length: self.data.len(),
        })?;
        let (decoded, _, _) = self.encoding.decode(&rest[..end]);
        self.position += end + 1;
        Ok(decoded.into_owned())
    }

    /// Advance past `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<()> {
        self.take(length).map(|_| ())
    }

    /// Advance to the next multiple of `boundary` from the start of the
    /// buffer. A position already on a multiple does not move. Fails if
    /// the target lies past the end of the buffer.
    pub fn align(&mut self, boundary: usize) -> Result<()> {
        debug_assert!(boundary > 0);
        let target = (self.position + boundary - 1) / boundary * boundary;
        if target > self.data.len() {
            return Err(JwwError::Truncated {
                offset: self.position,
                requested: target - self.position,
                length: self.data.len(),
            });
        }
        self.position = target;
        Ok(())
    }
}
