use ratatui::style::{Color, Modifier, Style, Stylize};

use crate::session::{Role, Severity};

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Assistant => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Role::Interviewer => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Role::System => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Green,
        Severity::Error => Color::Red,
    }
}
