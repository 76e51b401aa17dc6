//! Token classification and the borrowed token type.

use std::fmt;

/// Classification assigned to every token.
///
/// The scanner only ever produces `Whitespace`, `String`, `Keyword`,
/// `Comment`, `Type`, `Punctuation`, `PlainText` and `Decimal`. The
/// remaining variants exist so that class maps and renderers share one
/// closed vocabulary with markup-aware producers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Whitespace = 0,
    String = 1,
    Keyword = 2,
    Comment = 3,
    Type = 4,
    Literal = 5,
    Punctuation = 6,
    PlainText = 7,
    Tag = 8,
    HtmlTag = 9,
    HtmlAttrName = 10,
    HtmlAttrValue = 11,
    Decimal = 12,
}

impl Kind {
    /// Number of kinds. Sizes per-kind lookup tables.
    pub const COUNT: usize = 13;

    /// Every kind, in discriminant order.
    pub const ALL: [Kind; Self::COUNT] = [
        Kind::Whitespace,
        Kind::String,
        Kind::Keyword,
        Kind::Comment,
        Kind::Type,
        Kind::Literal,
        Kind::Punctuation,
        Kind::PlainText,
        Kind::Tag,
        Kind::HtmlTag,
        Kind::HtmlAttrName,
        Kind::HtmlAttrValue,
        Kind::Decimal,
    ];

    /// Index into a `[_; Kind::COUNT]` table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable, human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Whitespace => "whitespace",
            Kind::String => "string",
            Kind::Keyword => "keyword",
            Kind::Comment => "comment",
            Kind::Type => "type",
            Kind::Literal => "literal",
            Kind::Punctuation => "punctuation",
            Kind::PlainText => "plaintext",
            Kind::Tag => "tag",
            Kind::HtmlTag => "html-tag",
            Kind::HtmlAttrName => "html-attr-name",
            Kind::HtmlAttrValue => "html-attr-value",
            Kind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of the input.
///
/// `text` borrows from the [`SourceBuffer`](crate::SourceBuffer) the
/// scanner runs over; `start` is the byte offset of `text[0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a [u8],
    pub kind: Kind,
    pub start: usize,
}

impl Token<'_> {
    /// Byte length of the token. Always positive.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: the scanner never emits empty tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}
