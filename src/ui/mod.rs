//! UI rendering for the content hub.
//!
//! Rendering is a function of the content store and the current view
//! state, re-run whenever the app is marked dirty:
//!
//! - Header with the page heading and tagline
//! - Tab bar (Content Calendar / All Posts (N) / Guidelines)
//! - Scrollable body built as a [`Document`] by the active tab's view
//! - Footer with key hints
//!
//! Every frame clears and re-registers the click hit areas.

mod calendar;
mod chrome;
pub mod document;
mod guidelines;
pub mod helpers;
pub mod interaction;
pub mod post_card;
mod posts;
pub mod theme;

pub use calendar::build_calendar;
pub use chrome::KEY_HINTS;
pub use document::{Anchor, Document};
pub use guidelines::build_guidelines;
pub use post_card::{copy_button_label, COPIED_LABEL, COPY_LABEL};
pub use posts::build_posts;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::ContentStore;
use crate::view_state::{Tab, ViewState};
use chrome::{render_footer, render_header, render_tab_bar};
use theme::{dim_style, focus_style, COLOR_BORDER};

/// Build the body document for the active tab at `width` columns.
pub fn build_document(store: &ContentStore, state: &ViewState, width: usize) -> Document {
    match state.active_tab {
        Tab::Calendar => build_calendar(store, state, width),
        Tab::Posts => build_posts(store, state, width),
        Tab::Guidelines => build_guidelines(store, width),
    }
}

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();
    let store = app.store_handle();

    let [header_area, tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header_area, store.metadata());
    render_tab_bar(
        frame,
        tabs_area,
        app.view.active_tab,
        store.post_count(),
        &mut app.hit_areas,
    );
    render_body(frame, body_area, &store, app);
    render_footer(frame, footer_area, store.metadata());
}

fn render_body(frame: &mut Frame, area: Rect, store: &ContentStore, app: &mut App) {
    let block = Block::bordered().border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    let height = inner.height as usize;

    // One column of right padding inside the border.
    let doc = build_document(store, &app.view, inner.width.saturating_sub(1) as usize);
    let focused = app.focus.and_then(|target| doc.anchor(target)).copied();
    app.fit_scroll(doc.len(), focused.map(|a| (a.row, a.height)), height);
    let scroll = app.scroll;

    let end = (scroll + height).min(doc.len());
    let visible: Vec<Line<'static>> = doc.lines[scroll.min(end)..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let row = scroll + i;
            if focused.is_some_and(|a| a.contains_row(row)) {
                line.clone().patch_style(focus_style())
            } else {
                line.clone()
            }
        })
        .collect();

    for anchor in &doc.anchors {
        let start = anchor.row.max(scroll);
        let stop = (anchor.row + anchor.height).min(end);
        if start < stop {
            let rect = Rect::new(
                inner.x,
                inner.y + (start - scroll) as u16,
                inner.width,
                (stop - start) as u16,
            );
            app.hit_areas.register(rect, anchor.target.into());
        }
    }

    let block = if doc.len() > height {
        block.title_bottom(
            Line::styled(format!(" {}-{} of {} ", scroll + 1, end, doc.len()), dim_style())
                .right_aligned(),
        )
    } else {
        block
    };

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
