use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;
use crate::nav::View;
use crate::preview::{InlineMarks, LineKind, PreviewLine};

use super::{EDITOR_WIDTH_PERCENT, SIDEBAR_WIDTH_PERCENT, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(SIDEBAR_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let [header_area, body_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    match model.view {
        View::Parent => render_parent(model, frame, header_area, body_area),
        View::Editing => render_editing(model, frame, header_area, body_area),
        View::Preview => render_preview(model, frame, header_area, body_area),
    }
    status::render_status_bar(model, frame, status_area);
}

fn render_parent(model: &Model, frame: &mut Frame, header: Rect, body: Rect) {
    let title = Paragraph::new(model.identity.greeting())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, header);

    let mut lines: Vec<Line> = vec![Line::raw("")];
    lines.push(Line::styled(
        "Past entries",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if model.entries.is_empty() {
        lines.push(Line::styled(
            "  (none yet)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        for title in model.entries.titles() {
            lines.push(Line::raw(format!("  • {title}")));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Press Enter to start writing.",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines), body);
}

fn render_editing(model: &Model, frame: &mut Frame, header: Rect, body: Rect) {
    let greeting = Paragraph::new(model.identity.greeting())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(greeting, header);

    if model.sidebar_visible {
        let chunks = split_main_columns(body);
        render_compose(model, frame, chunks[0]);
        render_sidebar(model, frame, chunks[1]);
    } else {
        render_compose(model, frame, body);
    }
}

fn render_compose(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(session) = &model.session else {
        return;
    };
    let compose = session.area();

    let total_lines = compose.line_count();
    let gutter_width = line_number_width(total_lines);
    let visible = area.height as usize;
    let start = model.compose_scroll;
    let end = (start + visible).min(total_lines);
    let cursor = compose.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = compose.line(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);
        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            let chars: Vec<char> = line_text.chars().collect();
            let col = cursor.col.min(chars.len());
            let before: String = chars[..col].iter().collect();
            let at: String = chars.get(col).map_or_else(|| " ".to_string(), char::to_string);
            let after: String = chars.get(col + 1..).unwrap_or_default().iter().collect();

            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(
                at,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        } else {
            spans.push(Span::raw(line_text));
        }
        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_sidebar(model: &Model, frame: &mut Frame, area: Rect) {
    let items: Vec<Line> = if model.entries.is_empty() {
        vec![Line::styled(
            "(none yet)",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        model
            .entries
            .titles()
            .iter()
            .map(|title| Line::raw(format!("• {title}")))
            .collect()
    };
    let sidebar = Paragraph::new(items).block(Block::default().title("Past Entries").borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn render_preview(model: &Model, frame: &mut Frame, header: Rect, body: Rect) {
    let title = Paragraph::new("Preview").style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, header);

    // The preview reads the store at its own render time; whatever was
    // last committed is what it shows.
    let buffer = model.store.get();
    if buffer.is_empty() {
        let placeholder = Paragraph::new("Nothing to preview yet. Start writing!")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, body);
        return;
    }

    let lines = crate::preview::render_markup(buffer.markup());
    let visible = body.height as usize;
    let start = model.preview_scroll.min(lines.len());
    let end = (start + visible).min(lines.len());

    let content: Vec<Line> = lines[start..end].iter().map(preview_line_to_ui).collect();
    frame.render_widget(Clear, body);
    frame.render_widget(Paragraph::new(content), body);
}

fn preview_line_to_ui(line: &PreviewLine) -> Line<'static> {
    let base = style_for_kind(line.kind);
    let spans: Vec<Span> = line
        .spans
        .iter()
        .map(|span| Span::styled(span.text.clone(), apply_marks(base, span.marks)))
        .collect();
    Line::from(spans)
}

fn style_for_kind(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading(1) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineKind::Heading(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineKind::Quote => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        LineKind::CodeBlock => Style::default().fg(Color::Yellow),
        LineKind::Rule => Style::default().fg(Color::DarkGray),
        LineKind::Paragraph | LineKind::ListItem | LineKind::Blank => Style::default(),
    }
}

fn apply_marks(base: Style, marks: InlineMarks) -> Style {
    let mut style = base;
    if marks.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if marks.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if marks.code {
        style = style.fg(Color::Yellow);
    }
    style
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
    } else {
        5
    }
}
