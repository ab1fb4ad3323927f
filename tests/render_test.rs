//! Full-frame rendering with the ratatui test backend.

mod common;

use common::{buffer_contains, render_app, sample_store, test_app};
use contenthub::content::ContentStore;
use contenthub::ui::{COPIED_LABEL, COPY_LABEL};
use contenthub::view_state::Tab;

#[test]
fn test_header_and_tabs() {
    let (mut app, _) = test_app(sample_store());
    let buffer = render_app(&mut app, 100, 30);

    assert!(buffer_contains(&buffer, "Test Content Hub"));
    assert!(buffer_contains(&buffer, "Test tagline"));
    assert!(buffer_contains(&buffer, "Content Calendar"));
    assert!(buffer_contains(&buffer, "All Posts (3)"));
    assert!(buffer_contains(&buffer, "Guidelines"));
    assert!(buffer_contains(&buffer, "Test footer"));
}

#[test]
fn test_calendar_lists_weeks_collapsed() {
    let (mut app, _) = test_app(sample_store());
    let buffer = render_app(&mut app, 100, 30);

    assert!(buffer_contains(&buffer, "Week 1"));
    assert!(buffer_contains(&buffer, "Focus 2"));
    assert!(!buffer_contains(&buffer, "Caption for post 101"));
}

#[test]
fn test_expanded_week_shows_previews() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_week(1);
    let buffer = render_app(&mut app, 100, 30);

    assert!(buffer_contains(&buffer, "Caption for post 101..."));
    assert!(buffer_contains(&buffer, "Day 2 • Tuesday"));
    assert!(!buffer_contains(&buffer, "Caption for post 201"));
}

#[test]
fn test_expanded_post_shows_details_and_copy_button() {
    let (mut app, _) = test_app(sample_store());
    app.set_active_tab(Tab::Posts);
    app.toggle_post(102);
    let buffer = render_app(&mut app, 100, 40);

    assert!(buffer_contains(&buffer, "Image/Video Concept"));
    assert!(buffer_contains(&buffer, "Image idea for post 102"));
    assert!(buffer_contains(&buffer, "#Post102"));
    assert!(buffer_contains(&buffer, "CTA 102"));
    assert!(buffer_contains(&buffer, COPY_LABEL));
}

#[test]
fn test_copied_label_after_copy() {
    let (mut app, _) = test_app(sample_store());
    app.set_active_tab(Tab::Posts);
    app.toggle_post(101);
    app.copy_post(101);
    let buffer = render_app(&mut app, 100, 40);

    assert!(buffer_contains(&buffer, COPIED_LABEL));
    assert!(!buffer_contains(&buffer, COPY_LABEL));
}

#[test]
fn test_posts_tab_banner_counts_posts() {
    let (mut app, _) = test_app(ContentStore::builtin().unwrap());
    app.set_active_tab(Tab::Posts);
    let buffer = render_app(&mut app, 100, 30);

    assert!(buffer_contains(&buffer, "Complete Post Library"));
    assert!(buffer_contains(&buffer, "30 ready-to-publish LinkedIn posts"));
    assert!(buffer_contains(&buffer, "All Posts (30)"));
}

#[test]
fn test_guidelines_tab_renders() {
    let (mut app, _) = test_app(ContentStore::builtin().unwrap());
    app.set_active_tab(Tab::Guidelines);
    let buffer = render_app(&mut app, 100, 40);

    assert!(buffer_contains(&buffer, "Best Days"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (mut app, _) = test_app(ContentStore::builtin().unwrap());
    app.toggle_week(1);
    render_app(&mut app, 10, 5);
    render_app(&mut app, 1, 1);
}

#[test]
fn test_render_clears_stale_hit_areas() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_week(1);
    render_app(&mut app, 100, 30);
    assert!(app
        .hit_areas
        .rect_for(contenthub::ui::interaction::ClickAction::TogglePost(101))
        .is_some());

    app.toggle_week(1);
    render_app(&mut app, 100, 30);
    assert!(app
        .hit_areas
        .rect_for(contenthub::ui::interaction::ClickAction::TogglePost(101))
        .is_none());
}
