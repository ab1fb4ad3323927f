//! Terminal event handling: keys and mouse.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::ui::interaction::handle_click_action;
use crate::view_state::Tab;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('d') => self.scroll_page(true),
                KeyCode::Char('u') => self.scroll_page(false),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.set_active_tab(self.view.active_tab.next()),
            KeyCode::BackTab => self.set_active_tab(self.view.active_tab.previous()),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(tab) = Tab::from_index(c as usize - '1' as usize) {
                    self.set_active_tab(tab);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1),
            KeyCode::Home | KeyCode::Char('g') => self.focus_first(),
            KeyCode::End | KeyCode::Char('G') => self.focus_last(),
            KeyCode::PageDown => self.scroll_page(true),
            KeyCode::PageUp => self.scroll_page(false),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Left | KeyCode::Char('h') => self.collapse_focused(),
            KeyCode::Char('c') | KeyCode::Char('y') => self.copy_focused(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }
}
