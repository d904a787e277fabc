use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::{App, Focus};
use crate::session::TurnTarget;
use super::components::UiComponent;
use super::transcript::{render_input, render_transcript, transcript_text};

pub fn render_interview(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let session = &app.session;
    let focused = app.focus() == Focus::Interview;
    // the opening question is generated from the whole document
    let pending_label = if session.interview_started {
        "Thinking..."
    } else {
        "Reading document..."
    };
    let title = match &session.document {
        Some(document) => format!(" Mock Interview: {} ", document.file_name),
        None => " Mock Interview ".to_string(),
    };

    render_transcript(
        transcript_text(session.transcript(TurnTarget::Interview), pending_label, app.tick_count),
        &title,
        focused,
        layout[0],
        buf,
    );
    render_input(&session.interview_input, "Your answer", focused, layout[1], buf);
    UiComponent::hint("Enter: answer • Esc: back to chat").render(layout[2], buf);
}
