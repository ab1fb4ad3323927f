//! Clipboard error types.

use thiserror::Error;

/// Errors raised by a [`crate::traits::ClipboardProvider`].
///
/// Copying is best-effort: the app logs these and still shows the
/// "copied" indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened (no display server, sandbox, ...).
    #[error("clipboard unavailable: {message}")]
    Unavailable { message: String },

    /// The clipboard was opened but the write was rejected.
    #[error("clipboard write failed: {message}")]
    WriteFailed { message: String },
}
