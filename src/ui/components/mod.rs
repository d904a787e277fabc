mod empty_message;
mod help;
mod status;

/// Small bordered paragraphs shared by the panels.
pub struct UiComponent;
