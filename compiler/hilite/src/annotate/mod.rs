//! Position-based annotations over the original buffer.
//!
//! Instead of rewriting the source, the annotator describes where markup
//! should be inserted. An overlay renderer that owns the original bytes
//! copies the gaps verbatim and wraps each annotated span in its
//! `open`/`close` markup.
//!
//! # Offsets
//!
//! All offsets are byte offsets into the original buffer, the same unit
//! the scanner reports. Multi-byte characters therefore advance offsets by
//! their encoded length, not by one.

use hilite_lexer::{Kind, SourceBuffer};
use serde::Serialize;

use crate::ClassMap;

/// Markup to overlay on `source[start..end]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub open: Vec<u8>,
    pub close: Vec<u8>,
}

/// Decides whether, and how, a token is annotated.
pub trait Annotator {
    /// Annotation for the token `text` of `kind` starting at byte `start`,
    /// or `None` to leave it as plain source text.
    fn annotate(&self, start: usize, text: &[u8], kind: Kind) -> Option<Annotation>;
}

/// Annotates mapped kinds with `<span class="...">` / `</span>`.
#[derive(Clone, Debug, Default)]
pub struct HtmlAnnotator {
    classes: ClassMap,
}

impl HtmlAnnotator {
    pub fn new(classes: ClassMap) -> Self {
        Self { classes }
    }
}

impl Annotator for HtmlAnnotator {
    fn annotate(&self, start: usize, text: &[u8], kind: Kind) -> Option<Annotation> {
        let class = self.classes.get(kind);
        if class.is_empty() {
            return None;
        }
        let mut open = Vec::with_capacity(15 + class.len());
        open.extend_from_slice(b"<span class=\"");
        open.extend_from_slice(class.as_bytes());
        open.extend_from_slice(b"\">");
        Some(Annotation {
            start,
            end: start + text.len(),
            open,
            close: b"</span>".to_vec(),
        })
    }
}

/// Scan `src` and collect annotations in source order.
///
/// The read offset advances past every token, annotated or not, so gaps
/// between annotations are exactly the unmapped tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn annotate<A: Annotator + ?Sized>(src: &[u8], annotator: &A) -> Vec<Annotation> {
    let buf = SourceBuffer::new(src);
    let mut annotations = Vec::new();
    let mut read = 0;
    for tok in buf.scanner() {
        debug_assert_eq!(tok.start, read, "scanner skipped bytes");
        if let Some(ann) = annotator.annotate(read, tok.text, tok.kind) {
            annotations.push(ann);
        }
        read += tok.len();
    }
    tracing::debug!(annotations = annotations.len(), "annotate complete");
    annotations
}

#[cfg(test)]
mod tests;
