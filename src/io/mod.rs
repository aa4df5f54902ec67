//! I/O module for reading JWW binary drawing files

pub mod jww;

pub use jww::{JwwReader, JwwReaderConfiguration};
