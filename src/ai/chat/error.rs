use thiserror::Error;

/// The only way a chat turn can fail. The cause is kept as-is and not
/// classified any further.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Failed to get a reply: {0}")]
    ServiceCallFailure(#[source] anyhow::Error),
}

impl ChatError {
    pub fn cause(&self) -> &anyhow::Error {
        match self {
            ChatError::ServiceCallFailure(e) => e,
        }
    }
}
