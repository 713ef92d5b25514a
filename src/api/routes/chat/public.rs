//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::chat::{DisplayLog, Session, Transcript};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Everything the chat widget needs to re-render. `message` is what
/// the input box should hold afterwards, `null` to clear it.
#[derive(Serialize)]
pub struct ChatResponse {
    pub message: Option<String>,
    pub display_log: DisplayLog,
    pub transcript: Transcript,
}

impl ChatResponse {
    pub fn from_session(session: &Session) -> Self {
        Self {
            message: None,
            display_log: session.display_log().clone(),
            transcript: session.transcript().clone(),
        }
    }
}
