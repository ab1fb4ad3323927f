//! Mouse interaction: hit areas registered during render and the handler
//! that turns clicks into controller calls.

pub mod click_handler;
pub mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
