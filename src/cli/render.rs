//! Render command implementation.
//!
//! Renders source text to a PNG mosaic and embeds the full project
//! record in the file.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::cli::ParamArgs;
use crate::error::{Result, WordpxError};
use crate::output::{display_path, plural, Printer};
use crate::project::export;
use crate::render::{dimensions, words, write_png};
use crate::types::{Colour, FillMode, ProjectPayload};

/// Render text to a PNG mosaic with the project embedded
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Source text (alternatively, use --file)
    pub text: Option<String>,

    /// Read source text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output path
    #[arg(long, short, default_value = "mosaic.png")]
    pub output: PathBuf,

    /// Cells per row
    #[arg(long, default_value_t = 8)]
    pub width: u32,

    /// Seed mixed into the hash
    #[arg(long, default_value_t = 0)]
    pub seed: i32,

    /// Fill colour for empty cells (hex); transparent when omitted
    #[arg(long)]
    pub fill: Option<String>,

    /// Shrink the grid to the word count when one row suffices
    #[arg(long)]
    pub trim: bool,

    /// Integer scale factor for output pixels
    #[arg(long, default_value_t = 16)]
    pub scale: u32,

    #[command(flatten)]
    pub params: ParamArgs,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| WordpxError::Io {
            path: path.clone(),
            message: format!("Failed to read source text: {}", e),
        })?,
        (None, None) => {
            return Err(WordpxError::Parse {
                message: "no source text given".to_string(),
                help: Some("Pass text as an argument or use --file".to_string()),
            })
        }
        (Some(_), Some(_)) => unreachable!("clap rejects text together with --file"),
    };

    let (fill_mode, fill_colour) = match &args.fill {
        Some(hex) => (FillMode::Custom, Colour::from_hex(hex)?),
        None => (FillMode::Transparent, Colour::TRANSPARENT),
    };

    let payload = ProjectPayload {
        text,
        grid_width: args.width,
        seed: args.seed,
        params: args.params.to_params(),
        fill_mode,
        fill_colour,
        trim_width: args.trim,
    };

    let bytes = export(&payload, args.scale)?;
    write_png(&bytes, &args.output)?;

    let count = words(&payload.text).len();
    let (w, h) = dimensions(&payload);
    printer.status(
        "Rendered",
        &format!(
            "{} to {} ({}x{} cells)",
            plural(count, "word", "words"),
            display_path(&args.output),
            w,
            h
        ),
    );

    Ok(())
}
