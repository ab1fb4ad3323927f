//! Application controller for the TUI.
//!
//! [`App`] owns the [`ViewState`], the keyboard focus and scroll position,
//! the clipboard and the message channel used by the copy-feedback timer.
//! It reads the [`ContentStore`] but never changes it.
//!
//! Every mutation calls [`App::mark_dirty`]; the event loop redraws only
//! when `needs_redraw` is set.

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::content::{ContentStore, Post};
use crate::traits::ClipboardProvider;
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::{FocusTarget, Tab, ViewState};

/// Main application state.
pub struct App {
    store: Arc<ContentStore>,
    config: AppConfig,
    clipboard: Box<dyn ClipboardProvider>,
    /// Selection state shown by the renderer
    pub view: ViewState,
    /// Keyboard focus, always one of the active tab's focus targets
    pub focus: Option<FocusTarget>,
    /// First visible row of the body
    pub scroll: usize,
    /// Keep the focused row on screen (off after manual scrolling)
    follow_focus: bool,
    /// Body height from the last render
    pub viewport_height: usize,
    /// Clickable regions from the last render
    pub hit_areas: HitAreaRegistry,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    pub should_quit: bool,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for background messages; the event loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(
        store: Arc<ContentStore>,
        clipboard: Box<dyn ClipboardProvider>,
        config: AppConfig,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            store,
            config,
            clipboard,
            view: ViewState::new(),
            focus: None,
            scroll: 0,
            follow_focus: true,
            viewport_height: 0,
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        };
        app.sync_focus();
        app
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Shared handle to the store, for borrowing it alongside `&mut self`.
    pub fn store_handle(&self) -> Arc<ContentStore> {
        Arc::clone(&self.store)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Switch tabs. Focus moves to the first row of the new tab.
    pub fn set_active_tab(&mut self, tab: Tab) {
        let changed = self.view.active_tab != tab;
        self.view.set_active_tab(tab);
        if changed {
            tracing::debug!(?tab, "tab selected");
            self.scroll = 0;
            self.focus = None;
            self.follow_focus = true;
            self.sync_focus();
        }
        self.mark_dirty();
    }

    /// Expand `week`, collapsing any other, or collapse it if expanded.
    pub fn toggle_week(&mut self, week: u32) {
        self.view.toggle_week(week);
        tracing::debug!(week, expanded = self.view.is_week_expanded(week), "week toggled");
        self.sync_focus();
        self.mark_dirty();
    }

    /// Expand post `id`, collapsing any other, or collapse it if expanded.
    pub fn toggle_post(&mut self, id: u32) {
        self.view.toggle_post(id);
        tracing::debug!(post_id = id, expanded = self.view.is_post_expanded(id), "post toggled");
        self.sync_focus();
        self.mark_dirty();
    }

    /// Posts of `week` in calendar order; empty for unknown weeks.
    pub fn get_posts_for_week(&self, week: u32) -> Vec<&Post> {
        self.store.posts_for_week(week)
    }

    /// Copy `text` and show the copied indicator for `post_id`.
    ///
    /// The clipboard write is best-effort: a failure is logged and the
    /// indicator still shows. The indicator is cleared after
    /// `copy_feedback` unless a newer copy has replaced it.
    pub fn request_copy(&mut self, text: &str, post_id: u32) {
        match self.clipboard.set_text(text) {
            Ok(()) => tracing::info!(post_id, bytes = text.len(), "post copied to clipboard"),
            Err(err) => tracing::warn!(post_id, error = %err, "clipboard write failed"),
        }
        self.view.mark_copied(post_id);
        self.mark_dirty();
        self.schedule_copy_feedback_clear(post_id);
    }

    /// Copy a post's full text (caption, hashtags, CTA).
    pub fn copy_post(&mut self, post_id: u32) {
        let text = self.store.post(post_id).map(Post::full_text);
        match text {
            Some(text) => self.request_copy(&text, post_id),
            None => tracing::debug!(post_id, "copy requested for unknown post"),
        }
    }

    fn schedule_copy_feedback_clear(&self, post_id: u32) {
        let tx = self.message_tx.clone();
        let delay = self.config.copy_feedback;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppMessage::CopyFeedbackExpired { post_id });
                });
            }
            Err(_) => {
                tracing::warn!(post_id, "no async runtime, copied indicator will not auto-clear");
            }
        }
    }

    /// Apply a message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CopyFeedbackExpired { post_id } => {
                if self.view.clear_copied_if(post_id) {
                    tracing::debug!(post_id, "copied indicator cleared");
                    self.mark_dirty();
                } else {
                    tracing::trace!(post_id, "stale copied-indicator timer ignored");
                }
            }
        }
    }

    /// Handle every message already queued, without waiting.
    ///
    /// Returns how many were handled. Does nothing once the event loop has
    /// taken the receiver.
    pub fn drain_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                pending.push(message);
            }
        }
        let count = pending.len();
        for message in pending {
            self.handle_message(message);
        }
        count
    }
}
