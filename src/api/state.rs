use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ai::chat::Session;
use crate::core::AppConfig;
use crate::openai::OpenAiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    // The lock is held for the whole turn, including the wait on the
    // LLM, so submissions to the session are applied one at a time.
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = OpenAiClient::from(&config);
        let session = Session::new(Box::new(client), &config.openai_model);
        Self {
            session: Mutex::new(session),
        }
    }
}
