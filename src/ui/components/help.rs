use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Key hints, one `(key, action)` pair per line.
    pub fn help<'a>(bindings: &[(&'a str, &'a str)]) -> Paragraph<'a> {
        let lines: Vec<Line> = bindings
            .iter()
            .map(|(key, action)| Line::from(format!("{:<7} {}", key, action)))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Keys ")
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
    }

    /// Single-line hint bar under an input.
    pub fn hint(text: &str) -> Paragraph<'_> {
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
    }
}
