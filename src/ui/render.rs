use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{PLACEHOLDER, char_width, display_char, overlays, status};

const SELECTION_STYLE: Style = Style::new().bg(Color::Blue).fg(Color::White);
const CURSOR_STYLE: Style = Style::new().bg(Color::White).fg(Color::Black);

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let title_area = Rect { height: 1, ..area };
    let editor_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1 + footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(footer_rows),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    status::render_title_bar(frame, title_area);
    render_editor(model, frame, editor_area);
    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let editor = model.editor();
    let text = editor.text();
    let selection = editor.selection();
    let cursor = model.cursor();

    // Line number gutter width
    let total_lines = crate::editor::line_count(text);
    let gutter_width = line_number_width(total_lines);
    let text_cols = usize::from(area.width.saturating_sub(gutter_width + 1));

    let visible_height = area.height as usize;
    let start = model.scroll_line;
    let end = (start + visible_height).min(total_lines);

    let mut content: Vec<Line> = Vec::new();
    let mut line_offset = 0;
    for (line_idx, line_text) in text.split('\n').enumerate() {
        let line_chars = line_text.chars().count();
        if line_idx >= end {
            break;
        }
        if line_idx < start {
            line_offset += line_chars + 1;
            continue;
        }

        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);
        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        let mut run = String::new();
        let mut run_style = Style::default();
        let mut skipped = 0;
        let mut used = 0;
        for (i, ch) in line_text.chars().chain(std::iter::once(' ')).enumerate() {
            let offset = line_offset + i;
            let at_line_end = i == line_chars;
            if at_line_end && offset != cursor {
                break;
            }
            let width = if at_line_end { 1 } else { char_width(ch) };
            if skipped < model.scroll_col {
                skipped += width;
                continue;
            }
            if used + width > text_cols {
                break;
            }
            used += width;

            let style = if offset == cursor {
                CURSOR_STYLE
            } else if offset >= selection.start() && offset < selection.end() {
                SELECTION_STYLE
            } else {
                Style::default()
            };
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(display_char(ch));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        if text.is_empty() {
            spans.push(Span::styled(
                format!(" {PLACEHOLDER}"),
                Style::default().fg(Color::DarkGray).italic(),
            ));
        }

        content.push(Line::from(spans));
        line_offset += line_chars + 1;
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
