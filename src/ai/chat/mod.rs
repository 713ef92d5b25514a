//! Stateful chat with an LLM: the transcript, the display log, and
//! the orchestration of a single turn.
mod core;
mod error;
mod models;

pub use self::core::{Session, build_request, respond, submit};
pub use error::ChatError;
pub use models::{DisplayLog, Exchange, Transcript};
