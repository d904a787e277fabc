use std::time::Duration;

use color_eyre::eyre::OptionExt;
use crossterm::event::EventStream;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::session::Outcome;

/// Spinner and edge animation rate.
const TICK_FPS: f64 = 8.0;

/// Everything the main loop reacts to.
#[derive(Clone, Debug)]
pub enum Event {
    Tick,
    Crossterm(CrosstermEvent),
    App(AppEvent),
}

/// User actions, plus results of spawned requests.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,

    SelectFile(String),
    Upload,
    SendChat,
    GenerateMindMap,
    RequestInterview,
    ConfirmInterview(bool),
    SendInterviewAnswer,

    /// A spawned request finished.
    Completed(Outcome),
}

/// Single queue feeding the main loop: terminal input, ticks and app events.
#[derive(Debug)]
pub struct EventHandler {
    sender: UnboundedSender<Event>,
    receiver: UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Queue plus a background task forwarding terminal input and ticks.
    pub fn new() -> Self {
        let handler = Self::detached();
        tokio::spawn(forward_terminal_events(handler.sender()));
        handler
    }

    /// Queue with no terminal reader; only [`EventHandler::send`] feeds it.
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Event queue closed")
    }

    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Handle for tasks that report back with [`AppEvent::Completed`].
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs until the handler is dropped.
async fn forward_terminal_events(sender: UnboundedSender<Event>) {
    let mut input = EventStream::new();
    let mut ticks = tokio::time::interval(Duration::from_secs_f64(1.0 / TICK_FPS));

    loop {
        let event = tokio::select! {
            _ = sender.closed() => break,
            _ = ticks.tick() => Event::Tick,
            Some(Ok(input_event)) = input.next().fuse() => Event::Crossterm(input_event),
        };
        if sender.send(event).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detached_handler_delivers_in_order() {
        let mut events = EventHandler::detached();
        events.send(AppEvent::Upload);
        events.send(AppEvent::Quit);

        assert!(matches!(events.next().await.unwrap(), Event::App(AppEvent::Upload)));
        assert!(matches!(events.next().await.unwrap(), Event::App(AppEvent::Quit)));
    }
}
