// src/session/controller/mod.rs

mod complete;
mod interview;
mod mind_map;
mod perform;
mod select_file;
mod submit_turn;
mod upload;

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::graph::{LayoutConfig, MindMap};
use super::message::Message;
use super::notice::{Confirmation, Notice};
use super::request::PendingRequest;
use super::transcript::Transcript;
use super::turn::TurnTarget;

pub const CHAT_GREETING: &str = "Hello! I am NeuroDoc. Upload a PDF to start studying.";
pub const DEFAULT_MIND_MAP_QUERY: &str = "Summary";

/// The uploaded document. Replaced wholesale by a later upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub file_name: String,
    pub processed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphView {
    pub visible: bool,
    pub loading: bool,
    pub mind_map: Option<MindMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online(String),
    Offline(String),
}

/// Owns all view state. Actions come in pairs: a synchronous begin step
/// returning the request to issue (if any), and [`SessionController::complete`]
/// applying its outcome.
#[derive(Debug)]
pub struct SessionController {
    pub selected_file: Option<PathBuf>,
    pub document: Option<DocumentRef>,
    pub uploading: bool,
    pub chat: Transcript,
    pub chat_input: String,
    pub interview: Transcript,
    pub interview_input: String,
    pub interview_started: bool,
    pub interview_visible: bool,
    pub graph: GraphView,
    pub service_status: ServiceStatus,
    notices: VecDeque<Notice>,
    confirmation: Option<Confirmation>,
    layout: LayoutConfig,
}

impl SessionController {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            selected_file: None,
            document: None,
            uploading: false,
            chat: Transcript::with_greeting(Message::assistant(CHAT_GREETING)),
            chat_input: String::new(),
            interview: Transcript::new(),
            interview_input: String::new(),
            interview_started: false,
            interview_visible: false,
            graph: GraphView::default(),
            service_status: ServiceStatus::Unknown,
            notices: VecDeque::new(),
            confirmation: None,
            layout,
        }
    }

    pub fn is_document_processed(&self) -> bool {
        self.document.as_ref().map(|d| d.processed).unwrap_or(false)
    }

    pub fn transcript(&self, target: TurnTarget) -> &Transcript {
        match target {
            TurnTarget::Chat => &self.chat,
            TurnTarget::Interview => &self.interview,
        }
    }

    pub(crate) fn transcript_mut(&mut self, target: TurnTarget) -> &mut Transcript {
        match target {
            TurnTarget::Chat => &mut self.chat,
            TurnTarget::Interview => &mut self.interview,
        }
    }

    pub fn input_mut(&mut self, target: TurnTarget) -> &mut String {
        match target {
            TurnTarget::Chat => &mut self.chat_input,
            TurnTarget::Interview => &mut self.interview_input,
        }
    }

    /// The notice currently on screen.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn close_graph(&mut self) {
        self.graph.visible = false;
    }

    pub fn close_interview(&mut self) {
        self.interview_visible = false;
    }

    pub fn check_service(&self) -> PendingRequest {
        PendingRequest::Status
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
