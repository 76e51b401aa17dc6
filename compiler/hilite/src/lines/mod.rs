//! Line-structured token trees.
//!
//! Groups a token stream into lines for gutter-style renderers. Each line
//! holds classified tokens (mapped kinds, HTML-escaped labels) and literal
//! runs (unmapped kinds, merged while adjacent).
//!
//! # Line Boundaries
//!
//! Every `\n` byte ends a line, whatever token it appears in. The newline
//! itself belongs to no entry: a line covers `[start, end)` where `end` is
//! the offset of its `\n`, and the next line starts one byte later.
//! Tokens containing newlines (block comments, backtick strings, blank
//! lines inside whitespace runs) are split into per-line segments, so no
//! entry ever crosses a line boundary. Segment offsets stay absolute.

use hilite_lexer::{SourceBuffer, Token};
use serde::Serialize;

use crate::escape::escape_html;
use crate::ClassMap;

/// One source line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset of the terminating `\n`, or of EOF for the last line.
    pub end: usize,
    pub entries: Vec<Entry>,
}

impl Line {
    fn empty(start: usize) -> Self {
        Self {
            start,
            end: start,
            entries: Vec::new(),
        }
    }
}

/// Content of a line, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Literal(LiteralRun),
    Token(ClassifiedToken),
}

impl Entry {
    pub fn start(&self) -> usize {
        match self {
            Entry::Literal(run) => run.start,
            Entry::Token(tok) => tok.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Entry::Literal(run) => run.end,
            Entry::Token(tok) => tok.end,
        }
    }
}

/// Unclassified text, unescaped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LiteralRun {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A classified token segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassifiedToken {
    pub start: usize,
    pub end: usize,
    pub class: String,
    /// HTML-escaped token text.
    pub label: String,
}

/// Incremental line builder.
///
/// Feed tokens in scan order with [`push`](Self::push), then call
/// [`finish`](Self::finish). Offsets are shifted by the base offset given
/// at construction.
pub struct LineBuilder<'c> {
    classes: &'c ClassMap,
    base: usize,
    /// Absolute offset one past the last byte pushed.
    pos: usize,
    lines: Vec<Line>,
    current: Line,
}

impl<'c> LineBuilder<'c> {
    pub fn new(classes: &'c ClassMap, base: usize) -> Self {
        Self {
            classes,
            base,
            pos: base,
            lines: Vec::new(),
            current: Line::empty(base),
        }
    }

    /// Append one token, splitting it at every embedded newline.
    pub fn push(&mut self, tok: &Token<'_>) {
        let classes = self.classes;
        let class = classes.get(tok.kind);
        let mut seg_start = self.base + tok.start;
        let mut rest = tok.text;
        while let Some(nl) = memchr::memchr(b'\n', rest) {
            self.append(seg_start, &rest[..nl], class);
            self.break_line(seg_start + nl);
            seg_start += nl + 1;
            rest = &rest[nl + 1..];
        }
        self.append(seg_start, rest, class);
        self.pos = self.base + tok.end();
    }

    /// Close the open line and return all lines.
    ///
    /// The open line is always emitted, so `n` newlines produce `n + 1`
    /// lines and an empty input produces one empty line.
    pub fn finish(mut self) -> Vec<Line> {
        self.current.end = self.pos;
        self.lines.push(self.current);
        self.lines
    }

    fn append(&mut self, start: usize, text: &[u8], class: &str) {
        if text.is_empty() {
            return;
        }
        let end = start + text.len();
        if !class.is_empty() {
            self.current.entries.push(Entry::Token(ClassifiedToken {
                start,
                end,
                class: class.to_owned(),
                label: escape_html(text),
            }));
            return;
        }
        let text = String::from_utf8_lossy(text);
        if let Some(Entry::Literal(run)) = self.current.entries.last_mut() {
            debug_assert_eq!(run.end, start, "literal runs must be contiguous");
            run.end = end;
            run.text.push_str(&text);
            return;
        }
        self.current.entries.push(Entry::Literal(LiteralRun {
            start,
            end,
            text: text.into_owned(),
        }));
    }

    fn break_line(&mut self, newline_at: usize) {
        self.current.end = newline_at;
        let done = std::mem::replace(&mut self.current, Line::empty(newline_at + 1));
        tracing::trace!(
            start = done.start,
            end = done.end,
            entries = done.entries.len(),
            "line closed"
        );
        self.lines.push(done);
    }
}

/// Scan `src` and build its line tree, with offsets shifted by `base_offset`.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len(), base_offset = base_offset))]
pub fn build_lines(src: &[u8], classes: &ClassMap, base_offset: usize) -> Vec<Line> {
    let buf = SourceBuffer::new(src);
    let mut builder = LineBuilder::new(classes, base_offset);
    for tok in buf.scanner() {
        builder.push(&tok);
    }
    let lines = builder.finish();
    tracing::debug!(lines = lines.len(), "line tree complete");
    lines
}
