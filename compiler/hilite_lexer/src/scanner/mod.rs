//! Hand-written heuristic scanner producing classified [`Token`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and yields one
//! token per call with zero heap allocation. It never fails: malformed,
//! unterminated or non-UTF-8 input degrades into ordinary tokens, and the
//! concatenation of all token texts is always exactly the input.
//!
//! # Dispatch
//!
//! Each step decodes the character at the cursor and tries, in order:
//!
//! 1. continuation of an open quoted string
//! 2. identifier (letter or `_`), reclassified by the keyword table
//! 3. digit run (`Decimal`)
//! 4. whitespace run, newlines included
//! 5. line comment (`//` or `#`) through the next `\n`
//! 6. block comment (`/*` through `*/`)
//! 7. quote character, which opens a string
//! 8. a single punctuation character
//!
//! Fractional numbers are not recognized: `3.14` scans as `Decimal`,
//! `Punctuation`, `Decimal`.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::cursor::Cursor;
use crate::keywords::is_keyword_bytes;
use crate::{Kind, Token};

/// Single-pass tokenizer over one source buffer.
///
/// Not `Clone`: a scanner is driven to completion by exactly one consumer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Quote byte of the string currently being scanned.
    quote: Option<u8>,
    /// Kind tentatively assigned to the token in progress.
    pending: Option<Kind>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            quote: None,
            pending: None,
        }
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = if self.quote.is_some() {
            self.quoted()
        } else {
            self.dispatch()
        };
        if self.cursor.pos() == start {
            return Some(self.flush(start));
        }
        Some(Token {
            text: self.cursor.slice_from(start),
            kind,
            start,
        })
    }

    fn dispatch(&mut self) -> Kind {
        let (c, width) = self.cursor.current_char();
        if is_ident_start(c) {
            return self.identifier(c);
        }
        if is_digit(c) {
            self.cursor.eat_chars_while(is_digit);
            return Kind::Decimal;
        }
        if c.is_whitespace() {
            self.cursor.eat_chars_while(char::is_whitespace);
            return Kind::Whitespace;
        }
        match c {
            '#' => self.line_comment(),
            '/' if self.cursor.peek() == b'/' => self.line_comment(),
            '/' if self.cursor.peek() == b'*' => self.block_comment(),
            '`' | '\'' | '"' => self.open_quote(),
            _ => {
                self.cursor.advance_n(width);
                Kind::Punctuation
            }
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self, first: char) -> Kind {
        let start = self.cursor.pos();
        self.pending = Some(if first.is_uppercase() {
            Kind::Type
        } else {
            Kind::PlainText
        });
        self.cursor.eat_chars_while(is_ident_continue);
        let tentative = self.pending.take().unwrap_or(Kind::PlainText);
        if is_keyword_bytes(self.cursor.slice_from(start)) {
            Kind::Keyword
        } else {
            tentative
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn line_comment(&mut self) -> Kind {
        self.cursor.eat_line();
        Kind::Comment
    }

    fn block_comment(&mut self) -> Kind {
        self.cursor.advance_n(2); // consume "/*"
        // Unterminated comments run to EOF.
        self.cursor.eat_through(b"*/");
        Kind::Comment
    }

    // ─── Strings ────────────────────────────────────────────────────

    fn open_quote(&mut self) -> Kind {
        self.quote = Some(self.cursor.current());
        self.pending = Some(Kind::String);
        self.cursor.advance(); // consume opening quote
        self.quoted()
    }

    /// Scan to the closing quote, honoring backslash escapes.
    ///
    /// A backslash skips the character after it, so `\\` is a complete
    /// escape and does not protect a following quote. If the input ends
    /// first, everything up to EOF belongs to the string.
    fn quoted(&mut self) -> Kind {
        if let Some(quote) = self.quote {
            loop {
                match self.cursor.skip_to_quote_delim(quote) {
                    Some(b'\\') => {
                        self.cursor.advance(); // consume '\'
                        if !self.cursor.is_eof() {
                            self.cursor.advance_char(); // skip escaped char
                        }
                    }
                    Some(_) => {
                        self.cursor.advance(); // consume closing quote
                        break;
                    }
                    None => break,
                }
            }
        }
        self.quote = None;
        self.pending.take().unwrap_or(Kind::String)
    }

    // ─── EOF fallback ───────────────────────────────────────────────

    /// Force-consume the rest of the input under the pending kind.
    ///
    /// Only reached if a rule failed to advance, which is a scanner bug;
    /// flushing keeps the output total and guarantees termination.
    #[cold]
    fn flush(&mut self, start: usize) -> Token<'a> {
        tracing::error!(
            offset = start,
            "scanner made no progress, flushing remaining input"
        );
        let kind = self.pending.take().unwrap_or(Kind::PlainText);
        self.quote = None;
        self.cursor.eat_to_eof();
        Token {
            text: self.cursor.slice_from(start),
            kind,
            start,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}

#[inline]
fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && c.is_numeric())
}

/// Convenience function: scan `source` and collect `(kind, byte range)` pairs.
///
/// For streaming access, construct a [`SourceBuffer`](crate::SourceBuffer)
/// and iterate its [`scanner`](crate::SourceBuffer::scanner) directly.
pub fn tokenize(source: &[u8]) -> Vec<(Kind, Range<usize>)> {
    let buf = crate::SourceBuffer::new(source);
    buf.scanner()
        .map(|tok| (tok.kind, tok.start..tok.end()))
        .collect()
}
