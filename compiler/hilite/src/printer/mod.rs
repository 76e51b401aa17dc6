//! Streaming markup printer.
//!
//! Writes one token per call straight into an [`io::Write`] sink. There
//! is no output buffering at this layer; wrap the sink in a `BufWriter`
//! if it is unbuffered.

use std::io::{self, Write};

use hilite_lexer::{Kind, Scanner};

use crate::escape::write_escaped;
use crate::{ClassMap, HighlightError};

/// Renders a single token into a sink.
pub trait Printer {
    /// Write `text`, classified as `kind`, to `w`.
    fn print<W: Write + ?Sized>(&self, w: &mut W, text: &[u8], kind: Kind) -> io::Result<()>;
}

/// Wraps mapped kinds in `<span class="...">` and HTML-escapes all text.
#[derive(Clone, Debug, Default)]
pub struct HtmlPrinter {
    classes: ClassMap,
}

impl HtmlPrinter {
    pub fn new(classes: ClassMap) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }
}

impl Printer for HtmlPrinter {
    fn print<W: Write + ?Sized>(&self, w: &mut W, text: &[u8], kind: Kind) -> io::Result<()> {
        let class = self.classes.get(kind);
        if class.is_empty() {
            return write_escaped(w, text);
        }
        w.write_all(b"<span class=\"")?;
        w.write_all(class.as_bytes())?;
        w.write_all(b"\">")?;
        write_escaped(w, text)?;
        w.write_all(b"</span>")
    }
}

/// Drive `scanner` to completion, printing every token into `w`.
///
/// Stops at the first failed write and reports the offending token's offset.
#[tracing::instrument(level = "debug", skip_all, fields(start = scanner.pos()))]
pub fn print<W, P>(scanner: Scanner<'_>, w: &mut W, printer: &P) -> Result<(), HighlightError>
where
    W: Write + ?Sized,
    P: Printer,
{
    let mut count = 0usize;
    for tok in scanner {
        printer
            .print(w, tok.text, tok.kind)
            .map_err(|source| HighlightError::Write {
                offset: tok.start,
                source,
            })?;
        count += 1;
    }
    tracing::debug!(tokens = count, "print complete");
    Ok(())
}
