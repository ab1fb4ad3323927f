//! Concrete implementations of trait abstractions.
//!
//! - [`SystemClipboard`] - OS clipboard via `arboard`
//!
//! The [`mock`] submodule provides test doubles.

pub mod mock;
pub mod system_clipboard;

pub use mock::MockClipboard;
pub use system_clipboard::SystemClipboard;
