use std::env;

pub const DEFAULT_LLM_HOST: &str = "https://api.openai.com";
pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
}

impl AppConfig {
    /// Build the config from a lookup function so that values can come
    /// from somewhere other than the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_hostname =
            lookup("SIMCHAT_LLM_HOST").unwrap_or_else(|| DEFAULT_LLM_HOST.to_string());
        // The service rejects this with an auth error which surfaces
        // like any other failed reply
        let openai_api_key =
            lookup("OPENAI_API_KEY").unwrap_or_else(|| "thiswontworkforopenai".to_string());
        let openai_model =
            lookup("SIMCHAT_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}
