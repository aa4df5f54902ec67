//! # jwwrust
//!
//! A pure Rust library for reading JW_CAD for Windows (JWW) drawing
//! files.
//!
//! ## Features
//!
//! - Decodes the little-endian JWW binary layout: fixed 256-byte
//!   header, fixed-size layer table, tagged entity stream
//! - Eleven entity kinds (line, circle, arc, ellipse, text, dimension,
//!   point, solid, hatch, polyline, block insert)
//! - Geometry delivered in real units — millimeters and radians, never
//!   raw fixed-point values
//! - Legacy Shift_JIS text decoding with a selectable codec
//! - Configurable recovery: skip damaged records or fail fast
//! - Structured diagnostics collected alongside the document instead
//!   of log output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jwwrust::{JwwReader, validate};
//!
//! let bytes = std::fs::read("sample.jww")?;
//! if validate(&bytes) {
//!     let doc = JwwReader::new(bytes).read()?;
//!     for entity in &doc.entities {
//!         println!("{} on layer {}", entity.entity_type(), entity.layer());
//!     }
//! }
//! # Ok::<(), jwwrust::JwwError>(())
//! ```
//!
//! ## Architecture
//!
//! Data flows one direction: buffer → cursor → header → layer table →
//! entity stream → document.
//!
//! - `io::jww::JwwCursor` — bounds-checked little-endian reads
//! - `io::jww::reader` — the decoding pipeline and [`JwwReader`]
//! - `JwwDocument` — the immutable result, with its diagnostics

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{JwwError, Result};
pub use types::Vector2;

// Re-export entity types
pub use entities::{
    Arc, BlockInsert, Circle, Dimension, DimensionType, Ellipse, Entity, EntityCommon, Hatch,
    Line, Point, Polyline, Solid, Text, TextHorizontalAlignment, TextVerticalAlignment,
};

// Re-export table types
pub use tables::{Layer, LayerFlags};

// Re-export document types
pub use document::{JwwDocument, JwwHeader, Signature};

// Re-export I/O surface
pub use io::jww::{file_info, parse, validate, JwwFileInfo, JwwReader, JwwReaderConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
