// src/session/turn.rs
//! Chat and interview turns are the same flow: optimistic user entry, one
//! request, one reply. They differ only in where the reply goes and how a
//! failure is shown.

use super::message::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnTarget {
    Chat,
    Interview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePresentation {
    /// Append this text to the transcript under the reply role.
    InlineFallback(&'static str),
    /// Raise an error notice; the transcript is left as is.
    Notice(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPolicy {
    pub target: TurnTarget,
    pub reply_role: Role,
    pub on_failure: FailurePresentation,
    pub empty_input_notice: &'static str,
}

pub const CHAT_TURN: TurnPolicy = TurnPolicy {
    target: TurnTarget::Chat,
    reply_role: Role::Assistant,
    on_failure: FailurePresentation::InlineFallback("Brain connection failed."),
    empty_input_notice: "Type a question first.",
};

pub const INTERVIEW_TURN: TurnPolicy = TurnPolicy {
    target: TurnTarget::Interview,
    reply_role: Role::Interviewer,
    on_failure: FailurePresentation::Notice("Connection failed."),
    empty_input_notice: "Type an answer first.",
};

pub const STILL_WAITING_NOTICE: &str = "Still waiting for the previous reply.";

impl TurnPolicy {
    pub fn for_target(target: TurnTarget) -> &'static TurnPolicy {
        match target {
            TurnTarget::Chat => &CHAT_TURN,
            TurnTarget::Interview => &INTERVIEW_TURN,
        }
    }
}
