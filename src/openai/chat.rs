use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use crate::core::AppConfig;
use crate::openai::{CompletionRequest, completion};

/// Anything that can turn a completion request into the text of a
/// single reply. The chat orchestrator only talks to the LLM through
/// this trait so tests can swap in a scripted implementation.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error>;
}

pub type BoxedCompletion = Box<dyn Completion + Send + Sync + 'static>;

/// Client for an OpenAI compatible chat completion API.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    api_hostname: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_hostname: &str, api_key: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

impl From<&AppConfig> for OpenAiClient {
    fn from(config: &AppConfig) -> Self {
        Self::new(&config.openai_api_hostname, &config.openai_api_key)
    }
}

#[async_trait]
impl Completion for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Error> {
        let resp = completion(request, &self.api_hostname, &self.api_key).await?;
        reply_content(&resp)
    }
}

/// Pull the text of the first choice out of a completion response.
pub fn reply_content(resp: &Value) -> Result<String, Error> {
    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("No message received. Resp:\n\n {}", resp))
}
