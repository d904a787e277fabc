use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};
use crate::session::{Role, Transcript, TurnTarget};
use super::components::UiComponent;
use super::spinner;
use super::style::{dim_unless_focused, role_style};

fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "NeuroDoc",
        Role::Interviewer => "Interviewer",
        Role::System => "System",
    }
}

/// Styled lines for a transcript, with a trailing spinner while a reply is pending.
pub fn transcript_text(transcript: &Transcript, pending_label: &str, tick: u64) -> Text<'static> {
    let mut lines = Vec::new();

    for msg in transcript.messages() {
        let style = role_style(msg.role);
        let mut content = msg.content.lines();
        let first = content.next().unwrap_or_default().to_string();

        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", speaker(msg.role)), style),
            Span::styled(first, Style::default().fg(Color::White)),
        ]));
        for line in content {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(line.to_string(), Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    if transcript.is_pending() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", spinner(tick), pending_label),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
    }
    Text::from(lines)
}

const WRAP: Wrap = Wrap { trim: false };

/// Rows `text` occupies once word-wrapped to `width` columns.
fn wrapped_height(text: &Text<'static>, width: u16) -> u16 {
    Paragraph::new(text.clone())
        .wrap(WRAP)
        .line_count(width.max(1))
        .min(u16::MAX as usize) as u16
}

/// Bordered transcript kept scrolled to its newest entry.
pub fn render_transcript(text: Text<'static>, title: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2);
    let scroll = wrapped_height(&text, inner_width).saturating_sub(inner_height);

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(title.to_string())
                .border_type(BorderType::Rounded)
                .border_style(dim_unless_focused(focused, Style::default())),
        )
        .wrap(WRAP)
        .scroll((scroll, 0))
        .render(area, buf);
}

pub fn render_input(input: &str, title: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let cursor = if focused { "█" } else { "" };
    Paragraph::new(format!("> {}{}", input, cursor))
        .block(
            Block::bordered()
                .title(title.to_string())
                .border_type(BorderType::Rounded),
        )
        .style(dim_unless_focused(focused, Style::default().fg(Color::Yellow)))
        .render(area, buf);
}

pub fn render_chat_panel(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),     // History
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Hint
        ])
        .split(area);

    let focused = app.focus() == Focus::Chat;
    let chat = app.session.transcript(TurnTarget::Chat);
    let title = match &app.session.document {
        Some(document) if document.processed => format!(" Chat: {} ", document.file_name),
        _ => " Chat ".to_string(),
    };

    render_transcript(transcript_text(chat, "Thinking...", app.tick_count), &title, focused, layout[0], buf);
    render_input(&app.session.chat_input, "Ask about your document", focused, layout[1], buf);
    UiComponent::hint("Enter: send • Ctrl+G: mind map • Ctrl+T: interview")
        .render(layout[2], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Message;

    #[test]
    fn test_pending_transcript_shows_label() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("What is X?"));
        transcript.set_pending(true);

        let text = transcript_text(&transcript, "Thinking...", 0);
        let rendered: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered[0], "You: What is X?");
        assert!(rendered.last().unwrap().ends_with("Thinking..."));
    }

    #[test]
    fn test_wrapped_height_wraps_at_words() {
        // 23 columns would fit in two 12-column rows if split mid-word
        let text = Text::from(vec![Line::from("abcdefg abcdefg abcdefg"), Line::from("")]);
        assert_eq!(wrapped_height(&text, 12), 4);
    }

    #[test]
    fn test_long_reply_tail_stays_visible() {
        let mut transcript = Transcript::new();
        transcript.push(Message::assistant(format!("{}ENDMARK", "abcdefg ".repeat(40))));

        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        render_transcript(transcript_text(&transcript, "Thinking...", 0), " Chat ", true, area, &mut buf);

        let screen: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("ENDMARK"));
    }
}
