use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::nav::View;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status = match model.view {
        View::Parent => parent_status(),
        View::Editing => editing_status(model),
        View::Preview => preview_status(model),
    };

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

fn parent_status() -> String {
    " Enter: write  p: preview  q: quit".to_string()
}

fn editing_status(model: &Model) -> String {
    let chars = model.store.get().len_chars();
    let position = model
        .session
        .as_ref()
        .map(|session| {
            let cursor = session.area().cursor();
            format!("Ln {}, Col {}", cursor.line + 1, cursor.col + 1)
        })
        .unwrap_or_default();

    format!(
        " {} chars  {}  Esc: back  ^P: preview  ^N: new  ^B: sidebar",
        chars, position
    )
}

fn preview_status(model: &Model) -> String {
    let total = model.preview_line_count();
    let line = if total == 0 {
        0
    } else {
        model.preview_scroll.min(total - 1) + 1
    };
    format!(" Preview  Line {}/{}  Esc: back  q: quit", line, total)
}
