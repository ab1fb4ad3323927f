//! Ephemeral view state: what the user has selected or expanded.
//!
//! [`ViewState`] holds only plain values and pure transitions; it knows
//! nothing about the clipboard, timers or rendering. The controller
//! (`crate::app::App`) owns one instance and is the only thing that
//! mutates it.
//!
//! - [`Tab`]: which top-level view is active
//! - [`FocusTarget`] / [`focus_targets`]: the interactive rows a keyboard
//!   cursor can land on

mod focus;
mod tab;

pub use focus::{focus_targets, FocusTarget};
pub use tab::Tab;

/// Session-scoped selection state.
///
/// Every field starts unset. At most one week and at most one post are
/// expanded at any time; toggling another one replaces the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    /// Expanded calendar week, if any
    pub selected_week: Option<u32>,
    /// Expanded post, independent of tab and week
    pub expanded_post: Option<u32>,
    /// Post whose "copied" indicator is currently showing
    pub copied_id: Option<u32>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Expand `week`, or collapse it if it is already expanded.
    pub fn toggle_week(&mut self, week: u32) {
        self.selected_week = if self.selected_week == Some(week) {
            None
        } else {
            Some(week)
        };
    }

    /// Expand post `id`, or collapse it if it is already expanded.
    pub fn toggle_post(&mut self, id: u32) {
        self.expanded_post = if self.expanded_post == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Show the copied indicator for `id`, replacing any other.
    pub fn mark_copied(&mut self, id: u32) {
        self.copied_id = Some(id);
    }

    /// Clear the copied indicator only if it still belongs to `id`.
    ///
    /// Returns whether anything was cleared. A stale clear for a post that
    /// has since been superseded is a no-op.
    pub fn clear_copied_if(&mut self, id: u32) -> bool {
        if self.copied_id == Some(id) {
            self.copied_id = None;
            true
        } else {
            false
        }
    }

    pub fn is_week_expanded(&self, week: u32) -> bool {
        self.selected_week == Some(week)
    }

    pub fn is_post_expanded(&self, id: u32) -> bool {
        self.expanded_post == Some(id)
    }

    pub fn is_copied(&self, id: u32) -> bool {
        self.copied_id == Some(id)
    }
}
