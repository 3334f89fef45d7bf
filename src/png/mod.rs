//! PNG container codec: chunk scanning plus metadata inject/extract.
//!
//! Operates on byte buffers only; input buffers are never mutated. The
//! rest of the crate treats the carried record as an opaque text blob.

mod chunk;
mod meta;

pub use chunk::{chunk_crc, ChunkRef, ChunkScanner, SIGNATURE, TERMINAL_TYPE};
pub use meta::{extract, inject, METADATA_TYPE};
