//! View state transitions through the app controller.

mod common;

use common::{sample_store, test_app};
use contenthub::view_state::{focus_targets, FocusTarget, Tab, ViewState};

#[test]
fn test_initial_state_is_empty() {
    let state = ViewState::new();
    assert_eq!(state.active_tab, Tab::Calendar);
    assert_eq!(state.selected_week, None);
    assert_eq!(state.expanded_post, None);
    assert_eq!(state.copied_id, None);
}

#[test]
fn test_toggle_week_twice_collapses() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_week(2);
    assert_eq!(app.view.selected_week, Some(2));
    app.toggle_week(2);
    assert_eq!(app.view.selected_week, None);
}

#[test]
fn test_toggle_other_week_replaces() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_week(1);
    app.toggle_week(2);
    assert_eq!(app.view.selected_week, Some(2));
}

#[test]
fn test_only_one_post_expanded() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_post(101);
    app.toggle_post(102);
    assert_eq!(app.view.expanded_post, Some(102));
    assert!(!app.view.is_post_expanded(101));
}

#[test]
fn test_tab_switch_preserves_expansion() {
    let (mut app, _) = test_app(sample_store());
    app.toggle_week(1);
    app.toggle_post(102);
    app.set_active_tab(Tab::Guidelines);
    app.set_active_tab(Tab::Calendar);
    assert_eq!(app.view.selected_week, Some(1));
    assert_eq!(app.view.expanded_post, Some(102));
}

#[test]
fn test_expanded_post_carries_across_tabs() {
    let (mut app, _) = test_app(sample_store());
    app.set_active_tab(Tab::Posts);
    app.toggle_post(201);
    app.set_active_tab(Tab::Calendar);
    app.toggle_week(2);

    let targets = focus_targets(app.store(), &app.view);
    assert!(targets.contains(&FocusTarget::CopyButton(201)));
}

#[test]
fn test_focus_targets_per_tab() {
    let store = sample_store();
    let mut state = ViewState::new();
    assert_eq!(
        focus_targets(&store, &state),
        vec![FocusTarget::Week(1), FocusTarget::Week(2)]
    );

    state.toggle_week(1);
    assert_eq!(
        focus_targets(&store, &state),
        vec![
            FocusTarget::Week(1),
            FocusTarget::Post(101),
            FocusTarget::Post(102),
            FocusTarget::Week(2),
        ]
    );

    state.set_active_tab(Tab::Posts);
    state.toggle_post(102);
    assert_eq!(
        focus_targets(&store, &state),
        vec![
            FocusTarget::Post(101),
            FocusTarget::Post(102),
            FocusTarget::CopyButton(102),
            FocusTarget::Post(201),
        ]
    );

    state.set_active_tab(Tab::Guidelines);
    assert!(focus_targets(&store, &state).is_empty());
}

#[test]
fn test_state_changes_mark_dirty() {
    let (mut app, _) = test_app(sample_store());
    app.needs_redraw = false;
    app.toggle_week(1);
    assert!(app.needs_redraw);

    app.needs_redraw = false;
    app.set_active_tab(Tab::Posts);
    assert!(app.needs_redraw);
}
