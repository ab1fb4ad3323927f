//! All-posts view: the whole library, unfiltered.

use ratatui::text::{Line, Span};

use super::document::Document;
use super::post_card::render_post_card;
use super::theme::{dim_style, heading_style};
use crate::content::ContentStore;
use crate::view_state::ViewState;

pub fn build_posts(store: &ContentStore, state: &ViewState, width: usize) -> Document {
    let mut doc = Document::new();

    doc.push(Line::from(Span::styled(
        "Complete Post Library",
        heading_style(),
    )));
    doc.push(Line::from(Span::styled(
        format!(
            "{} ready-to-publish LinkedIn posts for your corporate audience",
            store.post_count()
        ),
        dim_style(),
    )));
    doc.blank();

    for post in store.posts() {
        render_post_card(&mut doc, post, state, 0, width);
    }

    doc
}
