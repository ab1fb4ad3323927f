//! Non-interactive output: JSON export and single-post text.

use serde::Serialize;

use crate::content::{
    CalendarWeek, ContentStore, PageMetadata, Post, PostingGuidelines, TargetAudience,
};
use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogExport<'a> {
    metadata: &'a PageMetadata,
    posts: &'a [Post],
    content_calendar: &'a [CalendarWeek],
    posting_guidelines: &'a PostingGuidelines,
    additional_strategies: &'a [String],
    target_audience: &'a TargetAudience,
}

/// The whole catalog as pretty-printed JSON.
pub fn export_catalog(store: &ContentStore) -> Result<String, CliError> {
    let export = CatalogExport {
        metadata: store.metadata(),
        posts: store.posts(),
        content_calendar: store.weeks(),
        posting_guidelines: store.guidelines(),
        additional_strategies: store.strategies(),
        target_audience: store.audience(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// The same text "Copy Full Post" places on the clipboard.
pub fn print_post(store: &ContentStore, id: u32) -> Result<String, CliError> {
    store
        .post(id)
        .map(Post::full_text)
        .ok_or(CliError::UnknownPost { id })
}
