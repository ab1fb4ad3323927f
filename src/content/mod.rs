//! Content store: the static catalog of posts, calendar weeks and
//! posting guidelines.
//!
//! The built-in campaign lives in `catalog`; [`ContentStore::builtin`]
//! validates it once and hands out a shared handle.

mod catalog;
pub mod models;
mod store;

pub use models::{
    CalendarWeek, PageMetadata, Post, PostingGuidelines, TargetAudience, PREVIEW_CHARS,
};
pub use store::ContentStore;
