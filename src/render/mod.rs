//! Rendering module for wordpx.
//!
//! Lays words out as a cell grid and encodes the grid as PNG bytes.

mod grid;
mod png;

pub use grid::{dimensions, render_grid, words};
pub use png::{encode_png, write_png};
