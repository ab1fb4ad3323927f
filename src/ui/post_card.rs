//! Post card: collapsed header plus expandable details.
//!
//! Shared by the calendar and posts views.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::document::Document;
use super::helpers::{flow_chips, wrap_text, wrapped_lines};
use super::theme::{
    badge_style, category_style, chip_style, dim_style, section_title_style, COLOR_BRAND,
    COLOR_SUCCESS, COLOR_TEXT,
};
use crate::content::{Post, PREVIEW_CHARS};
use crate::view_state::{FocusTarget, ViewState};

/// Copy button label while idle.
pub const COPY_LABEL: &str = "Copy Full Post";

/// Copy button label while the copied indicator is showing.
pub const COPIED_LABEL: &str = "Copied to Clipboard!";

/// Collapsed cards show at most this many preview rows.
const PREVIEW_ROWS: usize = 2;

/// Details are indented this far past the card header.
const DETAIL_INDENT: usize = 4;

pub fn copy_button_label(copied: bool) -> &'static str {
    if copied {
        COPIED_LABEL
    } else {
        COPY_LABEL
    }
}

/// Same pair as the calendar week headers: down when collapsed, up when open.
fn chevron(expanded: bool) -> &'static str {
    if expanded {
        "▴ "
    } else {
        "▾ "
    }
}

fn header_lines(post: &Post, expanded: bool, indent: usize, width: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    let mut lines = vec![Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(chevron(expanded), dim_style()),
        Span::styled(format!(" {:>2} ", post.id), badge_style()),
        Span::raw(" "),
        Span::styled(format!(" {} ", post.category), category_style(&post.category)),
        Span::raw("  "),
        Span::styled(post.schedule_label(), dim_style()),
        Span::styled("  ·  ", dim_style()),
        Span::styled(post.post_time.clone(), dim_style()),
    ])];

    let preview_indent = indent + 2;
    let preview = post.preview(PREVIEW_CHARS).replace('\n', " ");
    lines.extend(
        wrap_text(&preview, width.saturating_sub(preview_indent))
            .into_iter()
            .take(PREVIEW_ROWS)
            .map(|row| {
                Line::from(vec![
                    Span::raw(" ".repeat(preview_indent)),
                    Span::styled(row, Style::default().fg(COLOR_TEXT)),
                ])
            }),
    );
    lines
}

fn section_title(title: &str, indent: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(title.to_string(), section_title_style()),
    ])
}

fn copy_button(copied: bool, indent: usize) -> Line<'static> {
    let (icon, style) = if copied {
        (
            "✓",
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "⧉",
            Style::default()
                .fg(COLOR_TEXT)
                .bg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(format!("[ {} {} ]", icon, copy_button_label(copied)), style),
    ])
}

/// Append one post card to `doc`.
///
/// The header is anchored as [`FocusTarget::Post`]; when expanded, the
/// copy button is anchored as [`FocusTarget::CopyButton`].
pub fn render_post_card(
    doc: &mut Document,
    post: &Post,
    state: &ViewState,
    indent: usize,
    width: usize,
) {
    let expanded = state.is_post_expanded(post.id);
    doc.anchored(
        FocusTarget::Post(post.id),
        header_lines(post, expanded, indent, width),
    );

    if expanded {
        let inner = indent + DETAIL_INDENT;

        doc.blank();
        doc.push(section_title("Caption", inner));
        doc.extend(wrapped_lines(
            &post.caption,
            inner + 2,
            width,
            Style::default().fg(COLOR_TEXT),
        ));

        doc.blank();
        doc.push(section_title("Image/Video Concept", inner));
        doc.extend(wrapped_lines(
            &post.image_idea,
            inner + 2,
            width,
            dim_style().add_modifier(Modifier::ITALIC),
        ));

        doc.blank();
        doc.push(section_title("Hashtags", inner));
        let chips = post
            .hashtags
            .iter()
            .map(|tag| Span::styled(format!(" {} ", tag), chip_style()))
            .collect();
        doc.extend(flow_chips(chips, inner + 2, width));

        doc.blank();
        doc.push(section_title("Call to Action", inner));
        doc.extend(wrapped_lines(
            &post.cta,
            inner + 2,
            width,
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ));

        doc.blank();
        doc.anchored(
            FocusTarget::CopyButton(post.id),
            vec![copy_button(state.is_copied(post.id), inner)],
        );
    }

    doc.blank();
}
