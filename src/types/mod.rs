//! Core value types for wordpx.

mod colour;
mod params;
mod payload;

pub use colour::Colour;
pub use params::ColorParameters;
pub use payload::{FillMode, ProjectPayload};
