use crate::session::request::Outcome;
use super::{ServiceStatus, SessionController};

impl SessionController {
    /// Apply the outcome of a request issued by one of the begin steps.
    pub fn complete(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Status(result) => {
                self.service_status = match result {
                    Ok(message) => ServiceStatus::Online(message),
                    Err(e) => ServiceStatus::Offline(e),
                };
            }
            Outcome::Uploaded { file_name, result } => self.complete_upload(file_name, result),
            Outcome::Reply { target, result } => self.complete_turn(target, result),
            Outcome::MindMap(result) => self.complete_mind_map(result),
            Outcome::InterviewStarted(result) => self.complete_interview_start(result),
        }
    }
}
