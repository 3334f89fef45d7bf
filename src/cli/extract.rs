//! Extract command implementation.
//!
//! Prints the project record embedded in a PNG, and can re-render the
//! restored project to a fresh file as a round-trip check.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, WordpxError};
use crate::output::{display_path, Printer};
use crate::project::{export, import};
use crate::render::write_png;

/// Extract the embedded project from a PNG
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// PNG file to read
    #[arg(required = true)]
    pub file: PathBuf,

    /// Re-render the restored project to this path
    #[arg(long)]
    pub rerender: Option<PathBuf>,

    /// Scale factor for --rerender output
    #[arg(long, default_value_t = 16)]
    pub scale: u32,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let bytes = fs::read(&args.file).map_err(|e| WordpxError::Io {
        path: args.file.clone(),
        message: e.to_string(),
    })?;

    let Some(payload) = import(&bytes)? else {
        // Normal outcome: the image carries no project.
        printer.info(
            "Skipped",
            &format!("{} has no embedded project", display_path(&args.file)),
        );
        return Ok(());
    };

    printer.status("Extracted", &format!("project from {}", display_path(&args.file)));
    println!("{}", payload.to_json_pretty()?);

    if let Some(out) = &args.rerender {
        let rendered = export(&payload, args.scale)?;
        write_png(&rendered, out)?;
        printer.status("Rerendered", &display_path(out));
    }

    Ok(())
}
