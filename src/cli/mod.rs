pub mod completions;
pub mod derive;
pub mod extract;
pub mod inspect;
pub mod render;

use clap::{Args, Parser, Subcommand};

use crate::types::ColorParameters;

/// wordpx - Word mosaic renderer with self-describing PNG output
#[derive(Parser, Debug)]
#[command(name = "wordpx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to a PNG mosaic with the project embedded
    Render(render::RenderArgs),

    /// Extract the embedded project from a PNG
    Extract(extract::ExtractArgs),

    /// Derive and print the colour for a single word
    Derive(derive::DeriveArgs),

    /// Walk a PNG's chunks and verify their integrity fields
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Colour derivation flags shared by `render` and `derive`.
#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Hue multiplier applied to the hash
    #[arg(long, default_value_t = 1.0)]
    pub hue_multiplier: f64,

    /// Constant hue offset in degrees
    #[arg(long, default_value_t = 0.0)]
    pub hue_offset: f64,

    /// Weight of the first character in the hue
    #[arg(long, default_value_t = 0.0)]
    pub first_char_bias: f64,

    /// Weight of sin(hash) in the hue
    #[arg(long, default_value_t = 0.0)]
    pub sine_influence: f64,

    /// Base saturation percent (0-100)
    #[arg(long, default_value_t = 60.0)]
    pub saturation: f64,

    /// Base lightness percent (0-100)
    #[arg(long, default_value_t = 40.0)]
    pub lightness: f64,

    /// Saturation added per character of word length
    #[arg(long, default_value_t = 0.0)]
    pub length_influence: f64,

    /// Bit shift per character in the hash (0-31)
    #[arg(long, default_value_t = 5)]
    pub shift: u32,

    /// Modulus applied to the hash (disabled below 2)
    #[arg(long, default_value_t = 0)]
    pub modulus: u32,

    /// XOR mask applied to the hash (disabled at 0)
    #[arg(long, default_value_t = 0)]
    pub xor: u32,
}

impl ParamArgs {
    pub fn to_params(&self) -> ColorParameters {
        ColorParameters {
            hue_multiplier: self.hue_multiplier,
            hue_offset: self.hue_offset,
            first_char_bias: self.first_char_bias,
            sine_influence: self.sine_influence,
            saturation_base: self.saturation,
            lightness_base: self.lightness,
            length_influence: self.length_influence,
            bit_shift_amount: self.shift,
            prime_modulus: self.modulus,
            xor_mask: self.xor,
        }
    }
}
