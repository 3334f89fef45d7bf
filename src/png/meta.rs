//! Metadata chunk injection and extraction.
//!
//! One `wpTx` chunk carries the serialized project record. The type is
//! ancillary, private, and safe-to-copy under the PNG naming rules, so
//! generic readers skip it and editors that don't understand it keep it.
//! The chunk's data section is `key ++ NUL ++ payload`; the payload is
//! opaque UTF-8 and passes through byte-for-byte.

use crate::error::{Result, WordpxError};
use crate::png::chunk::{chunk_crc, ChunkRef, ChunkScanner, TERMINAL_TYPE};

/// Type tag of the embedded metadata chunk.
pub const METADATA_TYPE: [u8; 4] = *b"wpTx";

/// Insert a metadata chunk immediately before the terminal chunk.
///
/// Every pre-existing chunk passes through byte-identical, and the
/// terminal chunk stays terminal, so any generic reader still decodes
/// the image. Fails with `CorruptContainer` if the input buffer is
/// malformed or has no terminal chunk; a corrupt input is never turned
/// into a further-corrupted output.
pub fn inject(bytes: &[u8], key: &str, payload: &str) -> Result<Vec<u8>> {
    let key_bytes = validate_key(key)?;

    let mut scanner = ChunkScanner::new(bytes)?;
    let mut terminal_offset = None;
    while let Some(chunk) = scanner.next_chunk()? {
        if chunk.is_terminal() {
            terminal_offset = Some(chunk.offset);
        }
    }
    let terminal_offset = terminal_offset.ok_or_else(|| WordpxError::CorruptContainer {
        message: format!(
            "no {} chunk to insert before",
            String::from_utf8_lossy(&TERMINAL_TYPE)
        ),
        help: None,
    })?;

    let chunk = build_chunk(key_bytes, payload.as_bytes())?;

    let mut out = Vec::with_capacity(bytes.len() + chunk.len());
    out.extend_from_slice(&bytes[..terminal_offset]);
    out.extend_from_slice(&chunk);
    out.extend_from_slice(&bytes[terminal_offset..]);
    Ok(out)
}

/// Find the metadata chunk for `key` and return its payload.
///
/// `Ok(None)` means the container is well-formed but carries no matching
/// record — a normal outcome, not an error. Malformed chunk structure is
/// reported as `CorruptContainer`.
pub fn extract(bytes: &[u8], key: &str) -> Result<Option<String>> {
    let key_bytes = validate_key(key)?;

    let mut scanner = ChunkScanner::new(bytes)?;
    while let Some(chunk) = scanner.next_chunk()? {
        if chunk.chunk_type != METADATA_TYPE {
            continue;
        }
        if let Some(payload) = match_key(&chunk, key_bytes) {
            let text = String::from_utf8(payload.to_vec()).map_err(|_| {
                WordpxError::CorruptContainer {
                    message: "metadata payload is not valid UTF-8".to_string(),
                    help: None,
                }
            })?;
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Match a chunk's leading bytes against `key ++ NUL`; only the first
/// separator after the key splits, so NUL bytes inside the payload
/// survive.
fn match_key<'a>(chunk: &ChunkRef<'a>, key: &[u8]) -> Option<&'a [u8]> {
    let sep = key.len();
    if chunk.data.len() <= sep || &chunk.data[..sep] != key || chunk.data[sep] != 0 {
        return None;
    }
    Some(&chunk.data[sep + 1..])
}

fn build_chunk(key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(key.len() + 1 + payload.len());
    data.extend_from_slice(key);
    data.push(0);
    data.extend_from_slice(payload);

    let length = u32::try_from(data.len()).map_err(|_| WordpxError::Payload {
        message: "metadata payload exceeds the chunk size limit".to_string(),
        help: None,
    })?;

    let mut out = Vec::with_capacity(12 + data.len());
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(&METADATA_TYPE);
    out.extend_from_slice(&data);
    out.extend_from_slice(&chunk_crc(&METADATA_TYPE, &data).to_be_bytes());
    Ok(out)
}

fn validate_key(key: &str) -> Result<&[u8]> {
    if key.is_empty() || key.bytes().any(|b| b == 0) {
        return Err(WordpxError::InvalidParameter {
            message: "metadata key must be non-empty and free of NUL bytes".to_string(),
            help: None,
        });
    }
    Ok(key.as_bytes())
}
