//! Catalog validation errors.

use thiserror::Error;

/// Problems detected while assembling a [`crate::content::ContentStore`].
///
/// The built-in catalog is compiled in, so these only surface when the
/// catalog source itself is edited into an inconsistent state, or when a
/// store is assembled from custom data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Two posts share the same id.
    #[error("duplicate post id {id}")]
    DuplicatePostId { id: u32 },

    /// Two calendar weeks share the same week number.
    #[error("duplicate calendar week {week}")]
    DuplicateWeek { week: u32 },

    /// A calendar week lists a post id with no matching post.
    #[error("week {week} references unknown post id {id}")]
    UnknownPostReference { week: u32, id: u32 },

    /// A post id is scheduled in more than one week.
    #[error("post {id} is scheduled in both week {first} and week {second}")]
    PostInMultipleWeeks { id: u32, first: u32, second: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_weeks() {
        let err = ContentError::PostInMultipleWeeks {
            id: 7,
            first: 1,
            second: 2,
        };
        assert_eq!(err.to_string(), "post 7 is scheduled in both week 1 and week 2");
    }

    #[test]
    fn test_display_unknown_reference() {
        let err = ContentError::UnknownPostReference { week: 3, id: 42 };
        assert_eq!(err.to_string(), "week 3 references unknown post id 42");
    }
}
