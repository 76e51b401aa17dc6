//! HTML text escaping.
//!
//! Escapes the five HTML-significant characters with the same entities as
//! the conventional HTML text escaper (`&#34;` and `&#39;` for quotes) and
//! replaces NUL with U+FFFD. All other bytes, including invalid UTF-8,
//! pass through untouched.

use std::io::{self, Write};

/// Replacement for a byte that must be escaped, or `None`.
#[inline]
fn replacement(b: u8) -> Option<&'static [u8]> {
    match b {
        b'"' => Some(b"&#34;"),
        b'\'' => Some(b"&#39;"),
        b'&' => Some(b"&amp;"),
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        0 => Some("\u{FFFD}".as_bytes()),
        _ => None,
    }
}

/// Write `text` to `w`, escaped. Unescaped runs are written in one call.
pub fn write_escaped<W: Write + ?Sized>(w: &mut W, text: &[u8]) -> io::Result<()> {
    let mut last = 0;
    for (i, &b) in text.iter().enumerate() {
        if let Some(rep) = replacement(b) {
            w.write_all(&text[last..i])?;
            w.write_all(rep)?;
            last = i + 1;
        }
    }
    w.write_all(&text[last..])
}

/// Escape `text` into an owned string. Invalid UTF-8 becomes U+FFFD.
pub fn escape_html(text: &[u8]) -> String {
    let mut out = Vec::with_capacity(text.len());
    for &b in text {
        match replacement(b) {
            Some(rep) => out.extend_from_slice(rep),
            None => out.push(b),
        }
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
