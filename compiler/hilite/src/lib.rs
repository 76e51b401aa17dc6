//! Heuristic syntax highlighting renderers.
//!
//! Three ways to consume the token stream produced by [`hilite_lexer`]:
//!
//! - [`print`] with a [`Printer`] streams escaped, span-wrapped HTML to any
//!   [`std::io::Write`] sink.
//! - [`annotate`] with an [`Annotator`] returns byte-offset [`Annotation`]s to
//!   overlay on the original, unmodified source.
//! - [`build_lines`] returns a [`Line`] tree for line-oriented renderers,
//!   with multi-line tokens split at every newline.
//!
//! All three share one [`ClassMap`] vocabulary. The default map uses the
//! google-code-prettify class names (`kwd`, `str`, `com`, ...).
//!
//! ```
//! let html = hilite::as_html(b"return x").unwrap_or_default();
//! assert_eq!(
//!     String::from_utf8_lossy(&html),
//!     r#"<span class="kwd">return</span> <span class="pln">x</span>"#
//! );
//! ```

mod annotate;
mod class_map;
mod error;
mod escape;
mod lines;
mod printer;

use std::sync::Once;

pub use annotate::{annotate, Annotation, Annotator, HtmlAnnotator};
pub use class_map::ClassMap;
pub use error::HighlightError;
pub use escape::{escape_html, write_escaped};
pub use hilite_lexer::{Kind, Scanner, SourceBuffer, Token};
pub use lines::{build_lines, ClassifiedToken, Entry, Line, LineBuilder, LiteralRun};
pub use printer::{print, HtmlPrinter, Printer};

/// Render `src` as HTML with the default class map.
pub fn as_html(src: &[u8]) -> Result<Vec<u8>, HighlightError> {
    let buf = SourceBuffer::new(src);
    let mut out = Vec::with_capacity(src.len() * 4);
    print(buf.scanner(), &mut out, &HtmlPrinter::default())?;
    Ok(out)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=hilite=debug` or `RUST_LOG=hilite=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
