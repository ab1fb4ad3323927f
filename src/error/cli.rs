//! Command-line errors.

use thiserror::Error;

/// Errors produced while parsing or running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag that needs a value was given none.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// A post id argument was not a positive integer.
    #[error("invalid post id '{value}'")]
    InvalidPostId { value: String },

    /// The requested post does not exist in the catalog.
    #[error("no post with id {id}")]
    UnknownPost { id: u32 },

    /// JSON export failed.
    #[error("failed to export catalog: {0}")]
    Export(#[from] serde_json::Error),

    /// The catalog itself failed validation.
    #[error(transparent)]
    Content(#[from] super::ContentError),
}
