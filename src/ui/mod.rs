pub mod components;
pub mod graph_view;
pub mod interview;
pub mod popup;
pub mod sidebar;
pub mod style;
pub mod transcript;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Widget},
};
use crate::app::App;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(20)])
            .split(area);

        sidebar::render_sidebar(self, columns[0], buf);
        transcript::render_chat_panel(self, columns[1], buf);

        // overlays, bottom to top
        if self.session.graph.visible {
            Clear.render(columns[1], buf);
            graph_view::render_graph_view(self, columns[1], buf);
        }
        if self.session.interview_visible {
            Clear.render(columns[1], buf);
            interview::render_interview(self, columns[1], buf);
        }
        if let Some(buffer) = &self.file_prompt {
            popup::render_file_prompt(buffer, centered_rect(60, 20, area), buf);
        }
        if let Some(confirmation) = self.session.confirmation() {
            popup::render_confirmation(confirmation, centered_rect(50, 20, area), buf);
        }
        if let Some(notice) = self.session.notice() {
            popup::render_notice(notice, centered_rect(50, 25, area), buf);
        }
    }
}

pub(crate) fn spinner(tick: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use crate::api::AssistantClient;
    use crate::app::App;
    use crate::config::ClientConfig;
    use crate::event::EventHandler;
    use crate::session::{Notice, Outcome};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let config = ClientConfig::default();
        let api = AssistantClient::from_config(&config).unwrap();
        App::new(config, Arc::new(api), EventHandler::detached())
    }

    #[test]
    fn test_renders_greeting_and_notice() {
        let mut app = app();
        app.session.push_notice(Notice::error("Select a PDF first."));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| frame.render_widget(&app, frame.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("NeuroDoc"));
        assert!(text.contains("Select a PDF first."));
    }

    #[test]
    fn test_renders_mind_map_labels() {
        let mut app = app();
        app.session.generate_mind_map();
        app.session.complete(Outcome::MindMap(Ok(
            r#"{"nodes":[{"id":"1","label":"Rust"},{"id":"2","label":"Tokio"}],
                "edges":[{"source":"1","target":"2"}]}"#
                .to_string(),
        )));

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| frame.render_widget(&app, frame.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Knowledge Graph"));
        assert!(text.contains("Rust"));
        assert!(text.contains("Tokio"));
    }
}
