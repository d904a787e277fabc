use crate::session::message::Message;
use crate::session::notice::{Confirmation, Notice};
use crate::session::request::PendingRequest;
use super::SessionController;

pub const INTERVIEW_START_FAILED: &str = "Error starting interview.";

impl SessionController {
    /// First step of opening the interview: gate on the document and ask.
    pub fn request_interview(&mut self) {
        let Some(document) = self.document.as_ref().filter(|d| d.processed) else {
            self.push_notice(Notice::error("Upload a document first!"));
            return;
        };
        self.confirmation = Some(Confirmation::StartInterview {
            file_name: document.file_name.clone(),
        });
    }

    /// Answer to the start-interview question.
    ///
    /// Only the first accepted open (or the first after a failed start) issues
    /// a start request; later opens just show the running interview.
    pub fn confirm_interview(&mut self, accepted: bool) -> Option<PendingRequest> {
        if !matches!(self.confirmation.take(), Some(Confirmation::StartInterview { .. })) || !accepted {
            return None;
        }

        self.interview_visible = true;
        if self.interview_started || self.interview.is_pending() {
            return None;
        }

        self.interview.reset();
        self.interview.set_pending(true);
        Some(PendingRequest::InterviewStart)
    }

    pub(super) fn complete_interview_start(&mut self, result: Result<String, String>) {
        self.interview.set_pending(false);
        match result {
            Ok(opening) => {
                self.interview.push(Message::interviewer(opening));
                self.interview_started = true;
            }
            Err(_) => self.interview.push(Message::system(INTERVIEW_START_FAILED)),
        }
    }
}
