//! Trait abstractions for dependency injection and testability.
//!
//! - [`ClipboardProvider`] - system clipboard writes

pub mod clipboard;

pub use clipboard::ClipboardProvider;
