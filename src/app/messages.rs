//! AppMessage enum for async communication within the application.

/// Messages sent from background tasks back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The copied-indicator delay scheduled for `post_id` has elapsed.
    ///
    /// Only clears the indicator if it still belongs to `post_id`.
    CopyFeedbackExpired { post_id: u32 },
}
