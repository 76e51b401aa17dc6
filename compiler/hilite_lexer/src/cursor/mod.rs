//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte or one UTF-8
//! sequence at a time. EOF is the position reaching `source_len`; the
//! sentinel (`0x00`) and padding after it make `peek()` safe everywhere.
//!
//! # Interior Null Bytes
//!
//! The input may contain `0x00`. A null at `pos < source_len` is content,
//! a null at `pos >= source_len` is the sentinel. Callers that need to
//! know which one they are looking at use [`Cursor::is_eof`].

use memchr::memmem;

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all bytes after it are `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: usize) -> Self {
        debug_assert!(
            source_len < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position before EOF: the sentinel guarantees a
    /// valid read one past the last source byte.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Source bytes between `start` and `end`.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Unconsumed source bytes.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..self.source_len]
    }

    /// Returns the number of bytes in the UTF-8 sequence starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the character at the cursor and its width in bytes.
    ///
    /// Invalid or truncated sequences decode as one opaque byte reported
    /// as U+FFFD, so every byte of arbitrary input is reachable. Returns
    /// `('\0', 1)` at EOF; check [`is_eof`](Self::is_eof) first.
    pub fn current_char(&self) -> (char, usize) {
        let lead = self.current();
        if lead.is_ascii() {
            return (char::from(lead), 1);
        }
        let end = self.pos + Self::utf8_char_width(lead);
        if end <= self.source_len {
            if let Some(c) = std::str::from_utf8(&self.buf[self.pos..end])
                .ok()
                .and_then(|s| s.chars().next())
            {
                return (c, end - self.pos);
            }
        }
        (char::REPLACEMENT_CHARACTER, 1)
    }

    /// Advance past one character (one byte for invalid sequences).
    #[inline]
    pub fn advance_char(&mut self) {
        let (_, width) = self.current_char();
        self.advance_n(width);
    }

    /// Advance while `pred` holds for the decoded character at the cursor.
    ///
    /// Stops at EOF regardless of `pred`, so interior nulls and the sentinel
    /// never need special handling by the caller.
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() {
            let (c, width) = self.current_char();
            if !pred(c) {
                break;
            }
            self.pos += width;
        }
    }

    /// Advance past the next `\n` (inclusive), or to EOF if there is none.
    ///
    /// Used by the line comment scanner.
    pub fn eat_line(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past the next occurrence of `needle` (inclusive).
    ///
    /// Returns `false` and moves to EOF when `needle` does not occur.
    pub fn eat_through(&mut self, needle: &[u8]) -> bool {
        if let Some(offset) = memmem::find(self.remaining(), needle) {
            self.pos += offset + needle.len();
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance to the next `quote` or `\` byte and return it.
    ///
    /// Returns `None` and moves to EOF when neither occurs.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> Option<u8> {
        if let Some(offset) = memchr::memchr2(quote, b'\\', self.remaining()) {
            self.pos += offset;
            Some(self.current())
        } else {
            self.pos = self.source_len;
            None
        }
    }

    /// Consume everything up to EOF.
    pub fn eat_to_eof(&mut self) {
        self.pos = self.source_len;
    }
}
