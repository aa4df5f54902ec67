//! JWW file format reader support.
//!
//! Implements decoding of the little-endian JWW binary drawing format:
//! a fixed 256-byte header, a fixed-size layer table, and a sequential
//! stream of tagged entity records.
//!
//! # Module Structure
//!
//! - [`constants`] — Magic bytes, record tags, strides, skip widths
//! - [`cursor`] — Bounds-checked little-endian cursor over the input buffer
//! - [`units`] — Fixed-point to real-unit conversions (mm, radians)
//! - [`defaults`] — The default-substitution table applied during normalization
//! - [`reader`] — Header, layer table, and entity stream decoders plus
//!   the [`JwwReader`] orchestrator

pub mod constants;
pub mod cursor;
pub mod defaults;
pub mod reader;
pub mod units;

pub use cursor::JwwCursor;
pub use reader::{file_info, parse, validate, JwwFileInfo, JwwReader, JwwReaderConfiguration};
