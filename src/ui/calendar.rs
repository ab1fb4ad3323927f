//! Calendar view: collapsible weeks, each revealing its posts.

use ratatui::text::{Line, Span};

use super::document::Document;
use super::post_card::render_post_card;
use super::theme::{badge_style, dim_style, heading_style};
use crate::content::ContentStore;
use crate::view_state::{FocusTarget, ViewState};

/// Post cards inside an expanded week are indented this far.
const WEEK_POST_INDENT: usize = 4;

pub fn build_calendar(store: &ContentStore, state: &ViewState, width: usize) -> Document {
    let mut doc = Document::new();

    for week in store.weeks() {
        let expanded = state.is_week_expanded(week.week);
        let chevron = if expanded { "▴" } else { "▾" };
        doc.anchored(
            FocusTarget::Week(week.week),
            vec![
                Line::from(vec![
                    Span::styled(format!(" W{} ", week.week), badge_style()),
                    Span::raw("  "),
                    Span::styled(format!("Week {}", week.week), heading_style()),
                    Span::raw("  "),
                    Span::styled(chevron, dim_style()),
                ]),
                Line::from(vec![
                    Span::raw(" ".repeat(6)),
                    Span::styled(week.focus.clone(), dim_style()),
                ]),
            ],
        );

        doc.blank();
        if expanded {
            for post in store.posts_for_week(week.week) {
                render_post_card(&mut doc, post, state, WEEK_POST_INDENT, width);
            }
        }
    }

    doc
}
