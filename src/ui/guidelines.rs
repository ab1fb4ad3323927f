//! Guidelines view: schedule advice, growth strategies, target audience.
//!
//! Display only; nothing here is focusable.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::document::Document;
use super::helpers::{wrap_text, wrapped_lines};
use super::theme::{
    dim_style, heading_style, section_title_style, COLOR_BRAND, COLOR_SUCCESS, COLOR_TEXT,
    COLOR_WARNING,
};
use crate::content::ContentStore;

fn bullet_list(doc: &mut Document, items: &[String], marker: &str, marker_style: Style, width: usize) {
    let indent = 2 + marker.chars().count() + 1;
    for item in items {
        let rows = wrap_text(item, width.saturating_sub(indent));
        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("  {} ", marker), marker_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            doc.push(Line::from(vec![lead, Span::styled(row, Style::default().fg(COLOR_TEXT))]));
        }
    }
}

fn labelled(doc: &mut Document, label: &str, value: &str, width: usize) {
    doc.push(Line::from(Span::styled(label.to_string(), section_title_style())));
    doc.extend(wrapped_lines(value, 2, width, Style::default().fg(COLOR_TEXT)));
}

pub fn build_guidelines(store: &ContentStore, width: usize) -> Document {
    let mut doc = Document::new();
    let guidelines = store.guidelines();

    doc.push(Line::from(Span::styled("Optimal Posting Schedule", heading_style())));
    doc.blank();
    doc.push(Line::from(Span::styled("Best Days", section_title_style())));
    bullet_list(&mut doc, &guidelines.best_days, "●", Style::default().fg(COLOR_SUCCESS), width);
    doc.blank();
    doc.push(Line::from(Span::styled("Best Times", section_title_style())));
    bullet_list(&mut doc, &guidelines.best_times, "◷", Style::default().fg(COLOR_BRAND), width);
    doc.blank();
    doc.push(Line::from(Span::styled(
        "Avoid",
        section_title_style().fg(COLOR_WARNING),
    )));
    bullet_list(&mut doc, &guidelines.avoid_days, "•", Style::default().fg(COLOR_WARNING), width);
    doc.blank();
    labelled(&mut doc, "Recommended Frequency", &guidelines.frequency, width);
    labelled(&mut doc, "Engagement Strategy", &guidelines.engagement, width);
    doc.blank();

    doc.push(Line::from(Span::styled("Additional Growth Strategies", heading_style())));
    doc.blank();
    for (idx, strategy) in store.strategies().iter().enumerate() {
        let number = format!("{}.", idx + 1);
        let indent = number.len() + 3;
        for (i, row) in wrap_text(strategy, width.saturating_sub(indent))
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 {
                Span::styled(format!("  {} ", number), Style::default().fg(COLOR_BRAND))
            } else {
                Span::raw(" ".repeat(indent))
            };
            doc.push(Line::from(vec![lead, Span::styled(row, Style::default().fg(COLOR_TEXT))]));
        }
    }
    doc.blank();

    let audience = store.audience();
    doc.push(Line::from(Span::styled("Target Audience", heading_style())));
    doc.blank();
    doc.push(Line::from(Span::styled("Primary", section_title_style())));
    bullet_list(&mut doc, &audience.primary, "•", dim_style(), width);
    doc.blank();
    doc.push(Line::from(Span::styled("Key Services", section_title_style())));
    bullet_list(&mut doc, &audience.key_services, "•", dim_style(), width);

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidelines_sections_present() {
        let store = ContentStore::builtin().unwrap();
        let text = build_guidelines(&store, 80).plain_text().join("\n");
        for needle in [
            "Optimal Posting Schedule",
            "Best Days",
            "Best Times",
            "Avoid",
            "Recommended Frequency",
            "Engagement Strategy",
            "Additional Growth Strategies",
            "Target Audience",
            "Key Services",
        ] {
            assert!(text.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_strategies_are_numbered() {
        let store = ContentStore::builtin().unwrap();
        let text = build_guidelines(&store, 200).plain_text();
        assert!(text.iter().any(|l| l.starts_with("  1. ")));
        let last = format!("  {}. ", store.strategies().len());
        assert!(text.iter().any(|l| l.starts_with(&last)));
    }

    #[test]
    fn test_has_no_anchors() {
        let store = ContentStore::builtin().unwrap();
        assert!(build_guidelines(&store, 80).anchors.is_empty());
    }
}
