//! Color theme constants for the content hub.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Base palette
// ============================================================================

/// Brand blue used for the heading accent, badges and the active tab
pub const COLOR_BRAND: Color = Color::Rgb(37, 99, 235);

/// Primary text
pub const COLOR_TEXT: Color = Color::White;

/// Secondary text (focus lines, metadata)
pub const COLOR_DIM: Color = Color::Gray;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Background of the focused row
pub const COLOR_FOCUS_BG: Color = Color::Rgb(30, 41, 59);

/// Copy button once copied
pub const COLOR_SUCCESS: Color = Color::Rgb(34, 197, 94);

/// "Avoid" list accent
pub const COLOR_WARNING: Color = Color::Rgb(234, 179, 8);

/// Hashtag chip background
pub const COLOR_CHIP_BG: Color = Color::Rgb(30, 58, 138);

/// Hashtag chip text
pub const COLOR_CHIP_FG: Color = Color::Rgb(147, 197, 253);

// ============================================================================
// Category chips
// ============================================================================

/// Fallback for categories without a dedicated color
pub const COLOR_CATEGORY_DEFAULT: Color = Color::Gray;

/// Chip color for a post category. Unknown categories get gray.
pub fn category_color(category: &str) -> Color {
    match category {
        "Introduction" => Color::Rgb(168, 85, 247),
        "Educational - Team Building" => Color::Rgb(34, 197, 94),
        "Direct Invite" => Color::Rgb(239, 68, 68),
        "Testimonial" => Color::Rgb(234, 179, 8),
        "Feature Highlight - Axe Throwing" => Color::Rgb(59, 130, 246),
        "Feature Highlight - Splatter Paint" => Color::Rgb(236, 72, 153),
        "Feature Highlight - VR Gaming" => Color::Rgb(99, 102, 241),
        "Behind the Scenes" => Color::Rgb(249, 115, 22),
        "Problem/Solution" => Color::Rgb(20, 184, 166),
        "Seasonal/Timely" => Color::Rgb(6, 182, 212),
        _ => COLOR_CATEGORY_DEFAULT,
    }
}

// ============================================================================
// Styles
// ============================================================================

pub fn heading_style() -> Style {
    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
}

pub fn section_title_style() -> Style {
    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(COLOR_DIM)
}

pub fn badge_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(COLOR_BRAND)
        .add_modifier(Modifier::BOLD)
}

pub fn chip_style() -> Style {
    Style::default().fg(COLOR_CHIP_FG).bg(COLOR_CHIP_BG)
}

pub fn category_style(category: &str) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(category_color(category))
        .add_modifier(Modifier::BOLD)
}

pub fn focus_style() -> Style {
    Style::default().bg(COLOR_FOCUS_BG)
}
