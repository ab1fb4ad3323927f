//! Frame chrome: header, tab bar and footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{dim_style, heading_style, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_TEXT};
use crate::content::PageMetadata;
use crate::view_state::Tab;

/// Key hints shown in the footer.
pub const KEY_HINTS: &str =
    "Tab/1-3 switch · ↑↓ move · Enter open · c copy · PgUp/PgDn scroll · q quit";

/// Split "Brand Rest of heading" so the tail can be colored.
fn split_heading(heading: &str) -> (&str, &str) {
    match heading.split_once(' ') {
        Some((brand, rest)) => (brand, rest),
        None => (heading, ""),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, metadata: &PageMetadata) {
    let (brand, rest) = split_heading(&metadata.heading);
    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(brand.to_string(), heading_style()),
            Span::raw(" "),
            Span::styled(
                rest.to_string(),
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&metadata.tagline, area.width.saturating_sub(1) as usize),
                dim_style(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the tab bar and register one hit area per tab.
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    active: Tab,
    post_count: usize,
    hit_areas: &mut HitAreaRegistry,
) {
    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x.saturating_add(1);

    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(COLOR_BORDER)));
            x = x.saturating_add(3);
        }
        let label = format!(" {} ", tab.title(post_count));
        let width = label.width() as u16;
        let style = if *tab == active {
            Style::default()
                .fg(COLOR_TEXT)
                .bg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };

        let visible = area.right().saturating_sub(x).min(width);
        hit_areas.register(Rect::new(x, area.y, visible, 1), ClickAction::SelectTab(*tab));

        spans.push(Span::styled(label, style));
        x = x.saturating_add(width);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, metadata: &PageMetadata) {
    let width = area.width.saturating_sub(1) as usize;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(KEY_HINTS, width)),
            dim_style(),
        )),
        Line::from(Span::styled(
            format!(" {}", truncate_to_width(&metadata.footer, width)),
            Style::default().fg(COLOR_BORDER),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
