//! Layer table support
//!
//! A JWW file carries a fixed-size layer table directly after the
//! header; the entry at position `n` describes layer number `n`.

pub mod layer;

pub use layer::{Layer, LayerFlags};
