use anyhow::anyhow;

use super::error::ChatError;
use super::models::{DisplayLog, Exchange, Transcript};
use crate::ai::prompt::system_instruction;
use crate::openai::{BoxedCompletion, Completion, CompletionRequest, Message, Role, TEMPERATURE};

/// Assemble the request for the next turn: the system instruction,
/// then the prior transcript as-is, then the new user message.
pub fn build_request(model: &str, transcript: &Transcript, user_message: &str) -> CompletionRequest {
    let mut messages = Vec::with_capacity(transcript.len() + 2);
    messages.push(Message::new(Role::System, system_instruction()));
    messages.extend(transcript.as_request_history());
    messages.push(Message::new(Role::User, user_message));

    CompletionRequest {
        model: model.to_string(),
        messages,
        temperature: TEMPERATURE,
    }
}

/// Runs the next turn in chat. On success returns the trimmed reply
/// and a copy of `transcript` with the exchange appended. On failure
/// `transcript` is untouched and nothing is returned but the error.
pub async fn submit(
    client: &dyn Completion,
    model: &str,
    user_message: &str,
    transcript: &Transcript,
) -> Result<(String, Transcript), ChatError> {
    if user_message.trim().is_empty() {
        return Err(ChatError::ServiceCallFailure(anyhow!("Message is empty")));
    }

    let request = build_request(model, transcript, user_message);
    tracing::debug!(
        "Sending {} prior messages plus new message to {}",
        transcript.len(),
        model
    );

    let reply = client
        .complete(&request)
        .await
        .map_err(ChatError::ServiceCallFailure)?;
    let reply = reply.trim();

    let mut updated = transcript.clone();
    updated.append_exchange(user_message, reply);

    Ok((reply.to_string(), updated))
}

/// Entry point for a chat surface that holds its own state. Missing
/// state is treated as a new conversation. Returns `None` to clear the
/// input box along with the updated display log and transcript. The
/// caller's state is only read, so on error it stays as it was.
pub async fn respond(
    client: &dyn Completion,
    model: &str,
    user_message: &str,
    display_log: Option<&DisplayLog>,
    transcript: Option<&Transcript>,
) -> Result<(Option<String>, DisplayLog, Transcript), ChatError> {
    let transcript = transcript.cloned().unwrap_or_default();
    let mut display_log = display_log.cloned().unwrap_or_default();

    let (reply, transcript) = submit(client, model, user_message, &transcript).await?;
    display_log.push(Exchange::new(user_message, &reply));

    Ok((None, display_log, transcript))
}

/// A single running conversation. Construct one per chat surface with
/// `Session::new`; state starts empty and lives as long as the handle.
pub struct Session {
    client: BoxedCompletion,
    model: String,
    transcript: Transcript,
    display_log: DisplayLog,
}

impl Session {
    pub fn new(client: BoxedCompletion, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
            transcript: Transcript::new(),
            display_log: DisplayLog::new(),
        }
    }

    /// Send `user_message` and record the exchange if a reply comes
    /// back. Takes `&mut self` so only one submission can be in flight
    /// for a session.
    pub async fn submit(&mut self, user_message: &str) -> Result<String, ChatError> {
        let (reply, transcript) =
            submit(self.client.as_ref(), &self.model, user_message, &self.transcript).await?;

        self.transcript = transcript;
        self.display_log.push(Exchange::new(user_message, &reply));

        Ok(reply)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn display_log(&self) -> &DisplayLog {
        &self.display_log
    }
}
