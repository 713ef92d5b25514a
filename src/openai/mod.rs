mod chat;
mod core;

pub use chat::{BoxedCompletion, Completion, OpenAiClient, reply_content};
pub use self::core::{CompletionRequest, Message, Role, TEMPERATURE, completion};
