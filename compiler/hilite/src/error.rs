//! Error type for rendering passes.
//!
//! Scanning, annotation and line building are infallible. The only thing
//! that can fail is the sink a [`Printer`](crate::Printer) writes into.

use std::io;

/// Failure while rendering highlighted output.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The output sink rejected a write. `offset` is the source byte offset
    /// of the token that was being written; nothing after it was emitted.
    #[error("failed to write highlighted output for token at byte {offset}")]
    Write {
        offset: usize,
        #[source]
        source: io::Error,
    },
}
