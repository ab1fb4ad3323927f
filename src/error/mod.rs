//! Error types for Contenthub.
//!
//! Each layer has its own error enum:
//!
//! - [`ContentError`] - catalog validation failures at store construction
//! - [`ClipboardError`] - clipboard access and write failures
//! - [`CliError`] - bad command-line input and export failures
//!
//! The binary itself works in `color_eyre::Result`; these enums convert into
//! it through `std::error::Error`.

mod cli;
mod clipboard;
mod content;

pub use cli::CliError;
pub use clipboard::ClipboardError;
pub use content::ContentError;
