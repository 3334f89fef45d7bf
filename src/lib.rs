//! wordpx - Word mosaic renderer with self-describing output
//!
//! A library for deriving colours from words through a deterministic
//! 32-bit hash and exporting the resulting mosaic as a PNG that carries
//! its own project record. An exported image can be re-imported and
//! re-rendered pixel-for-pixel from the embedded record alone.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod png;
pub mod project;
pub mod render;
pub mod types;

pub use engine::{derive, DerivedColor};
pub use error::{Result, WordpxError};
pub use png::{extract, inject, ChunkRef, ChunkScanner};
pub use project::{export, import, METADATA_KEY};
pub use render::{encode_png, render_grid, write_png};
pub use types::{Colour, ColorParameters, FillMode, ProjectPayload};
