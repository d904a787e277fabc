use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::session::{Confirmation, Notice, Severity};
use super::style::severity_color;

fn popup_block(title: &str, color: Color) -> Block<'static> {
    Block::bordered()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
}

pub fn render_notice(notice: &Notice, area: Rect, buf: &mut Buffer) {
    let color = severity_color(notice.severity);
    let title = match notice.severity {
        Severity::Info => " Info ",
        Severity::Error => " Error ",
    };

    Clear.render(area, buf);
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(notice.text.clone(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::DarkGray))),
    ])
    .block(popup_block(title, color))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(area, buf);
}

pub fn render_confirmation(confirmation: &Confirmation, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            confirmation.prompt(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[y] Yes   [n] No", Style::default().fg(Color::Yellow))),
    ])
    .block(popup_block(" Confirm ", Color::Yellow))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(area, buf);
}

pub fn render_file_prompt(buffer: &str, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Paragraph::new(vec![
        Line::from(Span::styled("Path to a PDF:", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(format!("> {}█", buffer), Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::styled("Enter: select • Esc: cancel", Style::default().fg(Color::DarkGray))),
    ])
    .block(popup_block(" Open Document ", Color::Cyan))
    .wrap(Wrap { trim: false })
    .render(area, buf);
}
