use ratatui::{
    layout::Alignment,
    prelude::{Color, Stylize, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    /// Centered italic placeholder, e.g. while a panel waits on the service.
    pub fn empty_message<'a>(text: &'a str, title: &'a str, border_color: Color) -> Paragraph<'a> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .padding(Padding::symmetric(1, 1));

        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
