//! The embedded project record.
//!
//! `ProjectPayload` is the full restorable state of a mosaic: re-deriving
//! every word's colour from a deserialized payload must reproduce the
//! exact image it was extracted from. The PNG codec carries the
//! serialized form as an opaque text blob and never reformats it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordpxError};
use crate::types::{Colour, ColorParameters};

/// How cells without a word are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Empty cells stay fully transparent.
    #[default]
    Transparent,
    /// Empty cells take `fill_colour`.
    Custom,
}

/// Full restorable project state, embedded in exported images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Source text; whitespace-separated words become cells.
    pub text: String,
    /// Cells per row.
    pub grid_width: u32,
    /// Seed mixed into every character step of the hash.
    pub seed: i32,
    /// Colour derivation parameters.
    pub params: ColorParameters,
    /// Fill behaviour for empty cells.
    #[serde(default)]
    pub fill_mode: FillMode,
    /// Fill colour used when `fill_mode` is `Custom`.
    #[serde(default = "default_fill_colour")]
    pub fill_colour: Colour,
    /// Shrink the grid to the word count when a single row would do.
    #[serde(default)]
    pub trim_width: bool,
}

fn default_fill_colour() -> Colour {
    Colour::BLACK
}

impl ProjectPayload {
    /// Build a payload around defaults for everything but the text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grid_width: 8,
            seed: 0,
            params: ColorParameters::default(),
            fill_mode: FillMode::default(),
            fill_colour: default_fill_colour(),
            trim_width: false,
        }
    }

    /// Serialize to the JSON record carried in the metadata chunk.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| WordpxError::Payload {
            message: format!("Failed to serialize project: {}", e),
            help: None,
        })
    }

    /// Serialize for human-readable display (`wordpx extract`).
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WordpxError::Payload {
            message: format!("Failed to serialize project: {}", e),
            help: None,
        })
    }

    /// Deserialize a record extracted from a container.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WordpxError::Payload {
            message: format!("Failed to parse project record: {}", e),
            help: Some("The image's embedded record may come from an incompatible version".to_string()),
        })
    }

    /// Validate the payload at the boundary before rendering.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 {
            return Err(WordpxError::InvalidParameter {
                message: "gridWidth must be at least 1".to_string(),
                help: None,
            });
        }
        self.params.validate()
    }
}
