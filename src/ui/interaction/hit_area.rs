//! Hit area registry for mouse clicks.
//!
//! Renderers register clickable rectangles each frame; the event loop
//! hit-tests mouse clicks against the registry to find the action.

use ratatui::layout::Rect;

use crate::view_state::{FocusTarget, Tab};

/// What a click on a hit area does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Switch to a top-level tab
    SelectTab(Tab),
    /// Expand or collapse a calendar week
    ToggleWeek(u32),
    /// Expand or collapse a post card
    TogglePost(u32),
    /// Copy a post's full text
    CopyPost(u32),
}

impl From<FocusTarget> for ClickAction {
    fn from(target: FocusTarget) -> Self {
        match target {
            FocusTarget::Week(week) => ClickAction::ToggleWeek(week),
            FocusTarget::Post(id) => ClickAction::TogglePost(id),
            FocusTarget::CopyButton(id) => ClickAction::CopyPost(id),
        }
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas registered during the last render.
///
/// Cleared at the start of every frame. Later registrations win where
/// areas overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// First registered rectangle for `action`, if it is on screen.
    pub fn rect_for(&self, action: ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .find(|area| area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
