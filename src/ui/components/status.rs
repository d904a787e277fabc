use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::session::ServiceStatus;
use super::UiComponent;

impl UiComponent {
    pub fn service_status(status: &ServiceStatus) -> Paragraph<'_> {
        let (text, color) = match status {
            ServiceStatus::Unknown => ("Checking...".to_string(), Color::Gray),
            ServiceStatus::Online(message) => (format!("● {}", message), Color::Green),
            ServiceStatus::Offline(reason) => (format!("○ Offline: {}", reason), Color::Red),
        };

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(" Service ")
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
