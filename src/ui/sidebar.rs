use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::App;
use super::components::UiComponent;
use super::spinner;

const KEY_BINDINGS: [(&str, &str); 6] = [
    ("Ctrl+O", "choose PDF"),
    ("Ctrl+U", "upload"),
    ("Ctrl+G", "mind map"),
    ("Ctrl+T", "interview"),
    ("Esc", "close / quit"),
    ("Ctrl+C", "quit"),
];

pub fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(6),     // Document
            Constraint::Length(4),  // Service
            Constraint::Length(8),  // Keys
        ])
        .split(area);

    Paragraph::new("🧠 NeuroDoc")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    render_document(app, chunks[1], buf);
    UiComponent::service_status(&app.session.service_status).render(chunks[2], buf);
    UiComponent::help(&KEY_BINDINGS).render(chunks[3], buf);
}

fn render_document(app: &App, area: Rect, buf: &mut Buffer) {
    let session = &app.session;
    let mut lines = vec![Line::from(Span::styled(
        "Selected:",
        Style::default().fg(Color::Gray),
    ))];

    match session.selected_file_name() {
        Some(name) => lines.push(Line::from(name)),
        None => lines.push(Line::from(Span::styled(
            "none (Ctrl+O)",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines.push(Line::from(""));

    if session.uploading {
        lines.push(Line::from(Span::styled(
            format!("{} Processing...", spinner(app.tick_count)),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(document) = session.document.as_ref().filter(|d| d.processed) {
        lines.push(Line::from(Span::styled(
            "Active:",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            document.file_name.clone(),
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "No document memorized",
            Style::default().fg(Color::DarkGray),
        )));
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Document "))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
