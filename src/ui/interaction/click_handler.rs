//! Dispatches click actions onto the controller.

use super::hit_area::ClickAction;
use crate::app::App;
use crate::view_state::FocusTarget;

/// Apply a click. Clicking a row also moves keyboard focus onto it.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    tracing::debug!(?action, "click");
    match action {
        ClickAction::SelectTab(tab) => app.set_active_tab(tab),
        ClickAction::ToggleWeek(week) => {
            app.focus_on(FocusTarget::Week(week));
            app.toggle_week(week);
        }
        ClickAction::TogglePost(id) => {
            app.focus_on(FocusTarget::Post(id));
            app.toggle_post(id);
        }
        ClickAction::CopyPost(id) => {
            app.focus_on(FocusTarget::CopyButton(id));
            app.copy_post(id);
        }
    }
}
