use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::TITLE;

pub fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" {TITLE}"))
        .style(Style::default().bg(Color::Blue).fg(Color::White).bold());
    frame.render_widget(title, area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let dirty_indicator = if model.dirty { " [modified]" } else { "" };
    let (line, col) = model.cursor_line_col();
    let selection = model.editor().selection();
    let selection_info = if selection.is_collapsed() {
        String::new()
    } else {
        format!(" ({} selected)", selection.len())
    };

    let status = format!(
        " NOTE{dirty_indicator}  Ln {}, Col {}{selection_info}  ^S save  ^C copy  ^X cut  ^V paste  ^N new  ^Q quit  F1 help",
        line + 1,
        col + 1
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
