//! The core models for managing a stateful chat with an LLM.
use serde::Serialize;

use crate::openai::{Message, Role};

/// The conversation so far as user and assistant messages in the order
/// they happened. Only grows by whole exchanges and never holds the
/// system instruction.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a user message and the reply to it as one step.
    pub fn append_exchange(&mut self, user_message: &str, assistant_reply: &str) {
        self.0.reserve(2);
        self.0.push(Message::new(Role::User, user_message));
        self.0.push(Message::new(Role::Assistant, assistant_reply));
    }

    /// Snapshot of the stored messages to use as prior context for the
    /// next request.
    pub fn as_request_history(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

/// A user message and the reply it got.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub user: String,
    pub reply: String,
}

impl Exchange {
    pub fn new(user: &str, reply: &str) -> Self {
        Self {
            user: user.to_string(),
            reply: reply.to_string(),
        }
    }
}

/// What gets rendered in the chat window. Kept in lockstep with the
/// `Transcript`, one entry per exchange.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DisplayLog(Vec<Exchange>);

impl DisplayLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, exchange: Exchange) {
        self.0.push(exchange)
    }

    pub fn pairs(&self) -> &[Exchange] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exchange> {
        self.0.iter()
    }
}
