//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can look one or two bytes ahead (`//`, `/*`) without
//! checking bounds first. The total buffer size is rounded up to the next
//! 64-byte boundary, which also leaves room for a full UTF-8 sequence
//! of lookahead near the end of the input.
//!
//! The input is arbitrary bytes. Interior `0x00` bytes are legal content;
//! the cursor tells them apart from the sentinel by position.

use crate::{Cursor, Scanner};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of the bytes being highlighted.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Copy `source` into a cache-line padded buffer with a `0x00` sentinel.
    pub fn new(source: &[u8]) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a fresh [`Scanner`] over this buffer.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self.cursor())
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}
