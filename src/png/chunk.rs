//! Bounds-checked PNG chunk scanning.
//!
//! Every chunk is `length (4, big-endian) ++ type (4, ASCII) ++ data ++
//! crc (4)`. The scanner never trusts a length field: a header or data
//! section that would overrun the buffer is a [`CorruptContainer`]
//! outcome, not an out-of-bounds read.
//!
//! [`CorruptContainer`]: crate::error::WordpxError::CorruptContainer

use crate::error::{Result, WordpxError};

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// The terminal chunk type; must always be the last chunk.
pub const TERMINAL_TYPE: [u8; 4] = *b"IEND";

/// A borrowed view of one chunk inside a container buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRef<'a> {
    /// Byte offset of the chunk's length field within the container.
    pub offset: usize,
    /// The 4-byte ASCII type tag.
    pub chunk_type: [u8; 4],
    /// The data section (exactly `length` bytes).
    pub data: &'a [u8],
    /// The stored trailing CRC-32.
    pub crc: u32,
}

impl ChunkRef<'_> {
    /// Whether this is the terminal `IEND` chunk.
    pub fn is_terminal(&self) -> bool {
        self.chunk_type == TERMINAL_TYPE
    }

    /// Whether the stored CRC matches a recomputation over type + data.
    pub fn crc_valid(&self) -> bool {
        chunk_crc(&self.chunk_type, self.data) == self.crc
    }

    /// The type tag as a display string.
    pub fn type_str(&self) -> String {
        String::from_utf8_lossy(&self.chunk_type).into_owned()
    }
}

/// Compute the CRC-32 over a chunk's type tag and data section.
pub fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}

/// Forward scanner over a container's chunks.
///
/// Yields every well-formed chunk in order, the terminal chunk last;
/// stops after the terminal chunk even if trailing bytes follow. A clean
/// end of buffer with no terminal chunk simply ends iteration (the
/// caller decides whether that matters).
pub struct ChunkScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    terminal_seen: bool,
}

impl<'a> ChunkScanner<'a> {
    /// Start a scan; fails if the signature is missing.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < SIGNATURE.len() || bytes[..SIGNATURE.len()] != SIGNATURE {
            return Err(corrupt("missing PNG signature"));
        }
        Ok(Self {
            bytes,
            pos: SIGNATURE.len(),
            terminal_seen: false,
        })
    }

    /// Advance to the next chunk.
    pub fn next_chunk(&mut self) -> Result<Option<ChunkRef<'a>>> {
        if self.terminal_seen || self.pos == self.bytes.len() {
            return Ok(None);
        }

        let remaining = self.bytes.len() - self.pos;
        if remaining < 8 {
            return Err(corrupt("truncated chunk header"));
        }

        let length = u32::from_be_bytes(
            self.bytes[self.pos..self.pos + 4].try_into().expect("4 bytes"),
        ) as usize;
        let chunk_type: [u8; 4] = self.bytes[self.pos + 4..self.pos + 8]
            .try_into()
            .expect("4 bytes");

        // length + type + data + crc
        let total = length
            .checked_add(12)
            .ok_or_else(|| corrupt("chunk length field overflows"))?;
        if remaining < total {
            return Err(corrupt(&format!(
                "chunk {} claims {} data bytes but only {} remain",
                String::from_utf8_lossy(&chunk_type),
                length,
                remaining.saturating_sub(12)
            )));
        }

        let data = &self.bytes[self.pos + 8..self.pos + 8 + length];
        let crc = u32::from_be_bytes(
            self.bytes[self.pos + 8 + length..self.pos + total]
                .try_into()
                .expect("4 bytes"),
        );

        let chunk = ChunkRef {
            offset: self.pos,
            chunk_type,
            data,
            crc,
        };

        if chunk.is_terminal() {
            self.terminal_seen = true;
        }
        self.pos += total;

        Ok(Some(chunk))
    }
}

fn corrupt(message: &str) -> WordpxError {
    WordpxError::CorruptContainer {
        message: message.to_string(),
        help: None,
    }
}
