use crate::session::message::{Message, Role};
use crate::session::notice::Notice;
use crate::session::request::PendingRequest;
use crate::session::turn::{FailurePresentation, TurnPolicy, TurnTarget, STILL_WAITING_NOTICE};
use super::SessionController;

impl SessionController {
    /// Optimistically append the typed text and hand back the request.
    ///
    /// Nothing is sent for empty input or while this transcript still waits
    /// on a reply; in both cases the input buffer is left untouched.
    pub fn submit_turn(&mut self, target: TurnTarget) -> Option<PendingRequest> {
        let policy = TurnPolicy::for_target(target);

        let text = self.input_mut(target).clone();
        if text.trim().is_empty() {
            self.push_notice(Notice::error(policy.empty_input_notice));
            return None;
        }
        if self.transcript(target).is_pending() {
            self.push_notice(Notice::info(STILL_WAITING_NOTICE));
            return None;
        }

        self.input_mut(target).clear();
        let transcript = self.transcript_mut(target);
        transcript.push(Message::new(Role::User, text.clone()));
        transcript.set_pending(true);

        Some(PendingRequest::Turn { target, text })
    }

    pub fn send_chat(&mut self) -> Option<PendingRequest> {
        self.submit_turn(TurnTarget::Chat)
    }

    pub fn send_interview_answer(&mut self) -> Option<PendingRequest> {
        self.submit_turn(TurnTarget::Interview)
    }

    pub(super) fn complete_turn(&mut self, target: TurnTarget, result: Result<String, String>) {
        let policy = TurnPolicy::for_target(target);
        self.transcript_mut(target).set_pending(false);

        match (result, policy.on_failure) {
            (Ok(reply), _) => {
                self.transcript_mut(target).push(Message::new(policy.reply_role, reply));
            }
            (Err(_), FailurePresentation::InlineFallback(text)) => {
                self.transcript_mut(target).push(Message::new(policy.reply_role, text));
            }
            (Err(_), FailurePresentation::Notice(text)) => {
                self.push_notice(Notice::error(text));
            }
        }
    }
}
