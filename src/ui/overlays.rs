use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

const KEY_HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Note",
        &[
            ("Ctrl-s", "Save note"),
            ("Ctrl-n", "New note (clears text)"),
            ("Ctrl-q", "Save and quit"),
        ],
    ),
    (
        "Clipboard",
        &[
            ("Ctrl-c", "Copy selection, or whole note"),
            ("Ctrl-x", "Cut selection, or whole note"),
            ("Ctrl-v", "Paste at cursor"),
        ],
    ),
    (
        "Editing",
        &[
            ("Arrows, Home/End", "Move cursor"),
            ("Ctrl+Left/Right", "Word movement"),
            ("Ctrl+Home/End", "Note start / end"),
            ("Shift + movement", "Extend selection"),
            ("Ctrl-a", "Select all"),
            ("Esc", "Clear selection"),
        ],
    ),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();
    for (section, keys) in KEY_HELP {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(*section, section_style));
        for (key, action) in *keys {
            lines.push(Line::raw(format!("  {key:<20}{action}")));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("any key closes", dim_style));

    // Border(1) + padding(1) on each side.
    #[allow(clippy::cast_possible_truncation)]
    let popup_height = lines.len() as u16 + 4;
    let popup_width = area.width.saturating_sub(12).clamp(20, 60);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
