use super::message::{Message, Role};

/// Append-only message sequence plus an in-flight guard.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting(greeting: Message) -> Self {
        Self {
            messages: vec![greeting],
            pending: false,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::User)
    }

    /// A request for this transcript is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Only used before a fresh interview start.
    pub(crate) fn reset(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_user_message_skips_replies() {
        let mut transcript = Transcript::with_greeting(Message::assistant("hi"));
        assert!(transcript.last_user_message().is_none());

        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("answer"));
        transcript.push(Message::user("second"));
        transcript.push(Message::assistant("another"));

        assert_eq!(transcript.last_user_message().unwrap().content, "second");
        assert_eq!(transcript.len(), 5);
    }
}
