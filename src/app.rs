use crate::api::AssistantApi;
use crate::config::ClientConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::session::{dispatch, PendingRequest, SessionController, TurnTarget};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Which input currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Notice,
    Confirmation,
    FilePrompt,
    Interview,
    Graph,
    Chat,
}

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// All view state and actions.
    pub session: SessionController,
    /// Path being typed in the file prompt, if open.
    pub file_prompt: Option<String>,
    /// Event handler.
    pub events: EventHandler,
    /// Counts ticks for the loading spinners.
    pub tick_count: u64,
    pub config: ClientConfig,
    api: Arc<dyn AssistantApi>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("session", &self.session)
            .field("file_prompt", &self.file_prompt)
            .field("api", &"<AssistantApi>")
            .finish()
    }
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(config: ClientConfig, api: Arc<dyn AssistantApi>, events: EventHandler) -> Self {
        let session = SessionController::new(config.layout.clone());
        Self {
            running: true,
            session,
            file_prompt: None,
            events,
            tick_count: 0,
            config,
            api,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let status_check = self.session.check_service();
        self.spawn_request(status_check);

        let mut needs_redraw = true;
        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    self.tick_count = self.tick_count.wrapping_add(1);
                    // spinners and animated edges only
                    needs_redraw = self.is_animating();
                }
                Event::Crossterm(event) => {
                    if let ratatui::crossterm::event::Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_key_events(key_event)?;
                        }
                    }
                    needs_redraw = true;
                }
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    fn is_animating(&self) -> bool {
        self.session.uploading
            || self.session.graph.visible
            || self.session.chat.is_pending()
            || self.session.interview.is_pending()
    }

    pub fn focus(&self) -> Focus {
        if self.session.notice().is_some() {
            Focus::Notice
        } else if self.session.confirmation().is_some() {
            Focus::Confirmation
        } else if self.file_prompt.is_some() {
            Focus::FilePrompt
        } else if self.session.interview_visible {
            Focus::Interview
        } else if self.session.graph.visible {
            Focus::Graph
        } else {
            Focus::Chat
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key_event.code, KeyCode::Char('c' | 'C')) {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        let focus = self.focus();
        match focus {
            Focus::Notice => {
                if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.session.dismiss_notice();
                }
                return Ok(());
            }
            Focus::Confirmation => {
                match key_event.code {
                    KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                        self.events.send(AppEvent::ConfirmInterview(true))
                    }
                    KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                        self.events.send(AppEvent::ConfirmInterview(false))
                    }
                    _ => {}
                }
                return Ok(());
            }
            Focus::FilePrompt => {
                if let Some(buffer) = self.file_prompt.as_mut() {
                    match key_event.code {
                        KeyCode::Esc => self.file_prompt = None,
                        KeyCode::Enter => {
                            let path = buffer.trim().to_string();
                            self.file_prompt = None;
                            self.events.send(AppEvent::SelectFile(path));
                        }
                        KeyCode::Backspace => {
                            buffer.pop();
                        }
                        KeyCode::Char(ch) if !ctrl => buffer.push(ch),
                        _ => {}
                    }
                }
                return Ok(());
            }
            _ => {}
        }

        if ctrl {
            match key_event.code {
                KeyCode::Char('o') => self.file_prompt = Some(String::new()),
                KeyCode::Char('u') => self.events.send(AppEvent::Upload),
                KeyCode::Char('g') => self.events.send(AppEvent::GenerateMindMap),
                KeyCode::Char('t') => self.events.send(AppEvent::RequestInterview),
                _ => {}
            }
            return Ok(());
        }

        match focus {
            Focus::Interview => self.edit_turn_input(TurnTarget::Interview, key_event.code),
            Focus::Graph => {
                if key_event.code == KeyCode::Esc {
                    self.session.close_graph();
                }
            }
            _ => self.edit_turn_input(TurnTarget::Chat, key_event.code),
        }
        Ok(())
    }

    fn edit_turn_input(&mut self, target: TurnTarget, code: KeyCode) {
        match code {
            KeyCode::Esc => match target {
                TurnTarget::Interview => self.session.close_interview(),
                TurnTarget::Chat => self.events.send(AppEvent::Quit),
            },
            KeyCode::Enter => self.events.send(match target {
                TurnTarget::Chat => AppEvent::SendChat,
                TurnTarget::Interview => AppEvent::SendInterviewAnswer,
            }),
            KeyCode::Backspace => {
                self.session.input_mut(target).pop();
            }
            KeyCode::Char(ch) => self.session.input_mut(target).push(ch),
            _ => {}
        }
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        let request = match app_event {
            AppEvent::Quit => {
                self.quit();
                None
            }
            AppEvent::SelectFile(path) => {
                self.session.select_file(path);
                None
            }
            AppEvent::Upload => self.session.upload(),
            AppEvent::SendChat => self.session.send_chat(),
            AppEvent::GenerateMindMap => self.session.generate_mind_map(),
            AppEvent::RequestInterview => {
                self.session.request_interview();
                None
            }
            AppEvent::ConfirmInterview(accepted) => self.session.confirm_interview(accepted),
            AppEvent::SendInterviewAnswer => self.session.send_interview_answer(),
            AppEvent::Completed(outcome) => {
                debug!("Completed {:?}", outcome);
                self.session.complete(outcome);
                None
            }
        };

        if let Some(request) = request {
            self.spawn_request(request);
        }
    }

    /// Run `request` off the UI loop; the outcome returns as [`AppEvent::Completed`].
    pub fn spawn_request(&self, request: PendingRequest) {
        let api = Arc::clone(&self.api);
        let sender = self.events.sender();
        tokio::spawn(async move {
            let outcome = dispatch(api.as_ref(), request).await;
            let _ = sender.send(Event::App(AppEvent::Completed(outcome)));
        });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        info!("Quitting");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as ClientResult;
    use crate::session::{Message, Role};
    use async_trait::async_trait;

    struct EchoApi;

    #[async_trait]
    impl AssistantApi for EchoApi {
        async fn status(&self) -> ClientResult<String> {
            Ok("NeuroDoc System Active".to_string())
        }
        async fn upload(&self, _file_name: &str, _bytes: Vec<u8>) -> ClientResult<()> {
            Ok(())
        }
        async fn chat(&self, query: &str) -> ClientResult<String> {
            Ok(format!("echo: {}", query))
        }
        async fn mind_map(&self, _query: &str) -> ClientResult<String> {
            Ok(r#"{"nodes":[{"id":"1","label":"X"}]}"#.to_string())
        }
        async fn start_interview(&self) -> ClientResult<String> {
            Ok("Tell me about yourself.".to_string())
        }
        async fn interview_reply(&self, _answer: &str) -> ClientResult<String> {
            Ok("Next question.".to_string())
        }
    }

    fn app() -> App {
        App::new(ClientConfig::default(), Arc::new(EchoApi), EventHandler::detached())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    async fn pump(app: &mut App) {
        let Event::App(app_event) = app.events.next().await.unwrap() else {
            panic!("expected an app event");
        };
        app.handle_app_event(app_event);
    }

    #[tokio::test]
    async fn test_typed_chat_round_trip() {
        let mut app = app();
        for ch in "hi".chars() {
            app.handle_key_events(key(KeyCode::Char(ch))).unwrap();
        }
        assert_eq!(app.session.chat_input, "hi");

        app.handle_key_events(key(KeyCode::Enter)).unwrap();
        pump(&mut app).await; // SendChat: optimistic append + spawn
        assert_eq!(app.session.chat.len(), 2);
        assert!(app.session.chat.is_pending());

        pump(&mut app).await; // Completed
        assert_eq!(
            app.session.chat.messages().last(),
            Some(&Message::new(Role::Assistant, "echo: hi"))
        );
        assert!(!app.session.chat.is_pending());
    }

    #[tokio::test]
    async fn test_notice_blocks_input_until_dismissed() {
        let mut app = app();
        app.handle_key_events(ctrl('u')).unwrap();
        pump(&mut app).await;
        assert_eq!(app.focus(), Focus::Notice);

        app.handle_key_events(key(KeyCode::Char('x'))).unwrap();
        assert!(app.session.chat_input.is_empty());

        app.handle_key_events(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.focus(), Focus::Chat);
    }

    #[tokio::test]
    async fn test_file_prompt_selects_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("notes.pdf");
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();

        let mut app = app();
        app.handle_key_events(ctrl('o')).unwrap();
        assert_eq!(app.focus(), Focus::FilePrompt);
        for ch in pdf.to_string_lossy().chars() {
            app.handle_key_events(key(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key_events(key(KeyCode::Enter)).unwrap();
        pump(&mut app).await;

        assert_eq!(app.session.selected_file.as_deref(), Some(pdf.as_path()));
        assert_eq!(app.focus(), Focus::Chat);
    }

    #[tokio::test]
    async fn test_quit_from_chat() {
        let mut app = app();
        app.handle_key_events(key(KeyCode::Esc)).unwrap();
        pump(&mut app).await;
        assert!(!app.running);
    }
}
