//! Language-agnostic heuristic scanner for syntax highlighting.
//!
//! `hilite_lexer` turns arbitrary bytes into a lazy sequence of classified
//! tokens using rules that work reasonably well across C-like languages
//! (JavaScript, Java, Ruby, Python, Go, C) without a per-language grammar.
//! It has no renderer dependencies; the `hilite` crate layers HTML
//! printing, annotation lists and line trees on top.
//!
//! ```
//! use hilite_lexer::{Kind, SourceBuffer};
//!
//! let buf = SourceBuffer::from("a:=2");
//! let kinds: Vec<Kind> = buf.scanner().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [Kind::PlainText, Kind::Punctuation, Kind::Punctuation, Kind::Decimal]
//! );
//! ```

mod cursor;
mod keywords;
mod kind;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use keywords::{is_keyword, keywords};
pub use kind::{Kind, Token};
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
