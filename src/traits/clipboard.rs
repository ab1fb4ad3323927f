//! Clipboard provider trait abstraction.
//!
//! The controller only ever writes text, so the trait is a single method.
//! Production uses [`crate::adapters::SystemClipboard`]; tests use
//! [`crate::adapters::mock::MockClipboard`].

use crate::error::ClipboardError;

/// Outbound text sink for "Copy Full Post".
///
/// # Example
///
/// ```
/// use contenthub::adapters::mock::MockClipboard;
/// use contenthub::traits::ClipboardProvider;
///
/// let mut clipboard = MockClipboard::new();
/// clipboard.set_text("Hello").unwrap();
/// assert_eq!(clipboard.last_text().as_deref(), Some("Hello"));
/// ```
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
