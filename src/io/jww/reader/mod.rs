//! JWW reader — the main entry point for decoding JWW buffers.
//!
//! The read pipeline is fixed:
//!
//! 1. Resolve the legacy-text encoding from the configuration.
//! 2. Decode the 256-byte header (any failure here aborts the read).
//! 3. Decode the layer table (`layer_count` records; bad slots are
//!    replaced by defaults).
//! 4. Decode the entity stream until the buffer ends or the terminator
//!    tag is hit, applying the configured recovery policy.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jwwrust::JwwReader;
//!
//! let doc = JwwReader::from_file("sample.jww")?.read()?;
//! for entity in &doc.entities {
//!     println!("{}", entity.entity_type());
//! }
//! ```

pub mod entity_reader;
pub mod header_reader;
pub mod layer_reader;

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::Encoding;

use crate::document::JwwDocument;
use crate::error::{JwwError, Result};
use crate::notification::{NotificationCollection, NotificationType};

use super::constants::{LEGACY_CONTINUATION, LEGACY_PREFIX, MAGIC_STANDARD, MAGIC_SYMBOL};
use super::cursor::JwwCursor;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration options for the JWW reader.
#[derive(Debug, Clone)]
pub struct JwwReaderConfiguration {
    /// When `true`, any recoverable entity-stream error aborts the read
    /// instead of being skipped.
    ///
    /// Default: `false`.
    pub strict_mode: bool,

    /// When `true` (and strict mode is off), entity records that fail
    /// to decode are discarded and the stream resynchronizes past them.
    /// When both this and `strict_mode` are `false`, entity failures
    /// still abort the read — data is never dropped silently.
    ///
    /// Default: `true`.
    pub skip_invalid_entities: bool,

    /// Label of the legacy text encoding (as understood by
    /// `encoding_rs`). Unresolvable labels fall back to a single-byte
    /// encoding rather than failing.
    ///
    /// Default: `"shift_jis"`.
    pub text_encoding: String,
}

impl Default for JwwReaderConfiguration {
    fn default() -> Self {
        Self {
            strict_mode: false,
            skip_invalid_entities: true,
            text_encoding: "shift_jis".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Signature sniffing
// ---------------------------------------------------------------------------

/// Check whether a buffer starts with a supported magic.
///
/// Reads at most the first 7 bytes and never fails: a buffer too short
/// to hold a magic is simply not a JWW file.
pub fn validate(data: &[u8]) -> bool {
    if data.len() >= 3 && (data[..3] == MAGIC_STANDARD || data[..3] == MAGIC_SYMBOL) {
        return true;
    }
    data.len() >= 7 && data[..3] == LEGACY_PREFIX && data[3..7] == LEGACY_CONTINUATION
}

/// Signature and version information sniffed from a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwwFileInfo {
    /// The first three bytes, decoded as text
    pub signature: String,
    /// Stored format version
    pub version: u16,
    /// Total buffer length in bytes
    pub size: usize,
}

/// Sniff the leading signature and version of a buffer without
/// validating or decoding anything else.
///
/// Returns `None` only when the buffer cannot hold the five sniffed
/// bytes; never fails otherwise.
pub fn file_info(data: &[u8]) -> Option<JwwFileInfo> {
    if data.len() < 5 {
        return None;
    }
    Some(JwwFileInfo {
        signature: String::from_utf8_lossy(&data[..3]).into_owned(),
        version: LittleEndian::read_u16(&data[3..5]),
        size: data.len(),
    })
}

// ---------------------------------------------------------------------------
// JwwReader
// ---------------------------------------------------------------------------

/// JWW buffer reader — decodes the binary format and produces a
/// [`JwwDocument`].
pub struct JwwReader {
    /// Source bytes.
    data: Vec<u8>,

    /// User configuration.
    config: JwwReaderConfiguration,

    /// Notifications collected during reading.
    notifications: NotificationCollection,
}

impl JwwReader {
    /// Create a reader over a byte buffer.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            config: JwwReaderConfiguration::default(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Open a JWW file by path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(fs::read(path.as_ref())?))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: JwwReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Decode the buffer into a document.
    pub fn read(mut self) -> Result<JwwDocument> {
        let encoding = self.resolve_encoding();
        let mut cursor = JwwCursor::with_encoding(&self.data, encoding);

        // Header corruption is never recoverable
        let raw_header = header_reader::read_header(&mut cursor).map_err(|err| match err {
            JwwError::Signature(_) => err,
            other => JwwError::InvalidHeader(other.to_string()),
        })?;
        let header = raw_header.normalize();

        let layers = layer_reader::read_layers(&mut cursor, &header, &mut self.notifications);

        let entities =
            entity_reader::read_entities(&mut cursor, &self.config, &mut self.notifications)?;

        Ok(JwwDocument {
            header,
            layers,
            entities,
            notifications: self.notifications,
        })
    }

    /// Resolve the configured encoding label, falling back to a
    /// single-byte encoding when the label is unknown.
    fn resolve_encoding(&mut self) -> &'static Encoding {
        match Encoding::for_label(self.config.text_encoding.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "unknown text encoding label {:?}; falling back to windows-1252",
                        self.config.text_encoding
                    ),
                );
                encoding_rs::WINDOWS_1252
            }
        }
    }
}

/// Decode a JWW buffer into a document with the given configuration.
///
/// Convenience wrapper over [`JwwReader`].
pub fn parse(data: &[u8], config: JwwReaderConfiguration) -> Result<JwwDocument> {
    JwwReader::new(data).with_config(config).read()
}
