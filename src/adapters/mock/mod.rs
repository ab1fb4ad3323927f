//! Mock implementations for testing.
//!
//! - [`MockClipboard`] - records clipboard writes, can be made to fail

pub mod clipboard;

pub use clipboard::MockClipboard;
