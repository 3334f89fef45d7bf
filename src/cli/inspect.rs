//! Inspect command implementation.
//!
//! Walks a PNG's chunks, printing each type, length, and whether the
//! stored CRC matches a recomputation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, WordpxError};
use crate::output::{display_path, plural, Printer};
use crate::png::{ChunkScanner, METADATA_TYPE};

/// Walk a PNG's chunks and verify their integrity fields
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// PNG file to inspect
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let bytes = fs::read(&args.file).map_err(|e| WordpxError::Io {
        path: args.file.clone(),
        message: e.to_string(),
    })?;

    let mut scanner = ChunkScanner::new(&bytes)?;
    let mut count = 0;
    let mut bad_crcs = 0;
    let mut has_record = false;

    while let Some(chunk) = scanner.next_chunk()? {
        count += 1;
        let crc_note = if chunk.crc_valid() {
            "crc ok"
        } else {
            bad_crcs += 1;
            "crc MISMATCH"
        };
        println!(
            "{:>8}  {:>10}  {}",
            chunk.type_str(),
            plural(chunk.data.len(), "byte", "bytes"),
            crc_note
        );
        if chunk.chunk_type == METADATA_TYPE {
            has_record = true;
        }
    }

    let summary = format!(
        "{} in {}{}",
        plural(count, "chunk", "chunks"),
        display_path(&args.file),
        if has_record { " (project embedded)" } else { "" }
    );
    if bad_crcs > 0 {
        printer.warning(
            "Inspected",
            &format!("{}, {} failed crc", summary, bad_crcs),
        );
    } else {
        printer.status("Inspected", &summary);
    }

    Ok(())
}
