//! Keyboard focus and scrolling.

use super::App;
use crate::view_state::{focus_targets, FocusTarget, Tab};

impl App {
    /// Interactive rows of the active tab, top to bottom.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        focus_targets(self.store(), &self.view)
    }

    /// Keep `focus` pointing at a row that exists.
    ///
    /// When the focused row disappears (its week or post collapsed), focus
    /// falls back to the owning post, then the owning week, then the first
    /// row.
    pub fn sync_focus(&mut self) {
        let targets = self.focus_targets();
        let current = self.focus;
        if let Some(target) = current {
            if targets.contains(&target) {
                return;
            }
        }

        let owning_post = current
            .and_then(FocusTarget::post_id)
            .map(FocusTarget::Post)
            .filter(|t| targets.contains(t));
        let owning_week = current
            .and_then(FocusTarget::post_id)
            .and_then(|id| self.store().week_of_post(id))
            .map(FocusTarget::Week)
            .filter(|t| targets.contains(t));

        self.focus = owning_post
            .or(owning_week)
            .or_else(|| targets.first().copied());
    }

    /// Focus `target` if it is on the active tab.
    pub fn focus_on(&mut self, target: FocusTarget) {
        if self.focus_targets().contains(&target) {
            self.focus = Some(target);
            self.follow_focus = true;
            self.mark_dirty();
        }
    }

    /// Move focus by `delta` rows, clamped to the ends.
    pub fn move_focus(&mut self, delta: isize) {
        let targets = self.focus_targets();
        if targets.is_empty() {
            // Nothing to focus (guidelines tab): arrows scroll instead.
            self.scroll_by(delta);
            return;
        }
        let last = targets.len() - 1;
        let next = match self.focus.and_then(|f| targets.iter().position(|t| *t == f)) {
            Some(idx) => (idx as isize + delta).clamp(0, last as isize) as usize,
            None if delta < 0 => last,
            None => 0,
        };
        self.focus = Some(targets[next]);
        self.follow_focus = true;
        self.mark_dirty();
    }

    pub fn focus_first(&mut self) {
        self.focus = self.focus_targets().first().copied();
        self.follow_focus = true;
        self.scroll = 0;
        self.mark_dirty();
    }

    pub fn focus_last(&mut self) {
        self.focus = self.focus_targets().last().copied();
        self.follow_focus = true;
        self.mark_dirty();
    }

    /// Enter on the focused row: toggle it, or copy for a copy button.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Some(FocusTarget::Week(week)) => self.toggle_week(week),
            Some(FocusTarget::Post(id)) => self.toggle_post(id),
            Some(FocusTarget::CopyButton(id)) => self.copy_post(id),
            None => {}
        }
    }

    /// Copy the focused post, if its details are expanded.
    pub fn copy_focused(&mut self) {
        match self.focus.and_then(FocusTarget::post_id) {
            Some(id) if self.view.is_post_expanded(id) => self.copy_post(id),
            Some(id) => tracing::debug!(post_id = id, "copy ignored, post is collapsed"),
            None => {}
        }
    }

    /// Collapse the innermost expanded item around the focus.
    pub fn collapse_focused(&mut self) {
        if let Some(id) = self.focus.and_then(FocusTarget::post_id) {
            if self.view.is_post_expanded(id) {
                self.toggle_post(id);
                return;
            }
            if let Some(week) = self.store().week_of_post(id) {
                if self.view.active_tab == Tab::Calendar && self.view.is_week_expanded(week) {
                    self.toggle_week(week);
                }
            }
            return;
        }
        if let Some(FocusTarget::Week(week)) = self.focus {
            if self.view.is_week_expanded(week) {
                self.toggle_week(week);
            }
        }
    }

    /// Scroll the body manually. Focus no longer pulls the view back until
    /// it moves again.
    pub fn scroll_by(&mut self, delta: isize) {
        self.follow_focus = false;
        self.scroll = (self.scroll as isize + delta).max(0) as usize;
        self.mark_dirty();
    }

    /// Scroll by one viewport.
    pub fn scroll_page(&mut self, down: bool) {
        let page = self.viewport_height.max(1) as isize;
        self.scroll_by(if down { page } else { -page });
    }

    /// Clamp the scroll offset for a document of `doc_len` rows shown in
    /// `height` rows, bringing the focused span into view when following.
    ///
    /// `focus_span` is `(first_row, row_count)` of the focused item.
    pub fn fit_scroll(&mut self, doc_len: usize, focus_span: Option<(usize, usize)>, height: usize) {
        let height = height.max(1);
        self.viewport_height = height;

        if self.follow_focus {
            if let Some((row, span)) = focus_span {
                let bottom = row + span.clamp(1, height);
                if row < self.scroll {
                    self.scroll = row;
                } else if bottom > self.scroll + height {
                    self.scroll = bottom - height;
                }
            }
        }

        let max_scroll = doc_len.saturating_sub(height);
        self.scroll = self.scroll.min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::MockClipboard;
    use crate::app::App;
    use crate::config::AppConfig;
    use crate::content::ContentStore;
    use crate::view_state::{FocusTarget, Tab};

    fn app() -> App {
        App::new(
            ContentStore::builtin().unwrap(),
            Box::new(MockClipboard::new()),
            AppConfig::default(),
        )
    }

    #[test]
    fn test_move_focus_clamps() {
        let mut app = app();
        app.move_focus(-1);
        assert_eq!(app.focus, Some(FocusTarget::Week(1)));
        app.move_focus(100);
        assert_eq!(app.focus, Some(FocusTarget::Week(5)));
    }

    #[test]
    fn test_collapsing_week_moves_focus_to_week() {
        let mut app = app();
        app.toggle_week(2);
        app.focus_on(FocusTarget::Post(9));
        assert_eq!(app.focus, Some(FocusTarget::Post(9)));
        app.toggle_week(2);
        assert_eq!(app.focus, Some(FocusTarget::Week(2)));
    }

    #[test]
    fn test_collapsing_post_moves_focus_off_copy_button() {
        let mut app = app();
        app.set_active_tab(Tab::Posts);
        app.toggle_post(3);
        app.focus_on(FocusTarget::CopyButton(3));
        app.toggle_post(3);
        assert_eq!(app.focus, Some(FocusTarget::Post(3)));
    }

    #[test]
    fn test_focus_on_hidden_target_is_ignored() {
        let mut app = app();
        app.focus_on(FocusTarget::Post(1));
        assert_eq!(app.focus, Some(FocusTarget::Week(1)));
    }

    #[test]
    fn test_fit_scroll_follows_focus_down() {
        let mut app = app();
        app.fit_scroll(100, Some((40, 2)), 10);
        assert_eq!(app.scroll, 32);
        app.fit_scroll(100, Some((5, 1)), 10);
        assert_eq!(app.scroll, 5);
    }

    #[test]
    fn test_fit_scroll_clamps_to_document() {
        let mut app = app();
        app.scroll_by(500);
        app.fit_scroll(30, Some((0, 1)), 10);
        assert_eq!(app.scroll, 20);
    }

    #[test]
    fn test_guidelines_arrows_scroll() {
        let mut app = app();
        app.set_active_tab(Tab::Guidelines);
        assert_eq!(app.focus, None);
        app.move_focus(1);
        assert_eq!(app.scroll, 1);
    }
}
