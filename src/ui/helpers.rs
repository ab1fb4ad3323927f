//! Text layout helpers: width-aware wrapping and truncation.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to `width` display columns.
///
/// Explicit newlines are kept (an empty input line yields an empty output
/// line). Words wider than `width` are split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(line_width > 0);

            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if line_width > 0 {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width + ch_width > width && line_width > 0 {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
            }
        }
        out.push(line);
    }
    out
}

/// Wrap `text` and turn each row into a styled line behind `indent`.
pub fn wrapped_lines(text: &str, indent: usize, width: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|row| Line::from(vec![Span::raw(pad.clone()), Span::styled(row, style)]))
        .collect()
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Lay out pre-styled chips left to right, starting a new row when the
/// next chip would overflow `width`. Chips are separated by one space.
pub fn flow_chips(chips: Vec<Span<'static>>, indent: usize, width: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    let avail = width.saturating_sub(indent).max(1);
    let mut lines = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let w = chip.content.width();
        if used > 0 && used + 1 + w > avail {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.append(&mut row);
            lines.push(Line::from(spans));
            used = 0;
        }
        if used > 0 {
            row.push(Span::raw(" "));
            used += 1;
        }
        used += w;
        row.push(chip);
    }
    if !row.is_empty() {
        let mut spans = vec![Span::raw(pad)];
        spans.append(&mut row);
        lines.push(Line::from(spans));
    }
    lines
}
