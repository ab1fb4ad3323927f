//! Keyboard focus over the interactive rows of the active tab.

use super::{Tab, ViewState};
use crate::content::ContentStore;

/// An interactive row: something Enter (or a click) can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// A calendar week header (toggles the week)
    Week(u32),
    /// A post card header (toggles the post details)
    Post(u32),
    /// The copy button of an expanded post
    CopyButton(u32),
}

impl FocusTarget {
    /// Post id this target belongs to, if any.
    pub fn post_id(self) -> Option<u32> {
        match self {
            FocusTarget::Week(_) => None,
            FocusTarget::Post(id) | FocusTarget::CopyButton(id) => Some(id),
        }
    }
}

fn push_post_targets(targets: &mut Vec<FocusTarget>, id: u32, state: &ViewState) {
    targets.push(FocusTarget::Post(id));
    if state.is_post_expanded(id) {
        targets.push(FocusTarget::CopyButton(id));
    }
}

/// Interactive rows visible in the active tab, top to bottom.
///
/// Derived from the store and state on demand; the guidelines tab has none.
pub fn focus_targets(store: &ContentStore, state: &ViewState) -> Vec<FocusTarget> {
    let mut targets = Vec::new();
    match state.active_tab {
        Tab::Calendar => {
            for week in store.weeks() {
                targets.push(FocusTarget::Week(week.week));
                if state.is_week_expanded(week.week) {
                    for post in store.posts_for_week(week.week) {
                        push_post_targets(&mut targets, post.id, state);
                    }
                }
            }
        }
        Tab::Posts => {
            for post in store.posts() {
                push_post_targets(&mut targets, post.id, state);
            }
        }
        Tab::Guidelines => {}
    }
    targets
}
