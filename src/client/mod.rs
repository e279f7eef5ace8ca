mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::GenerationError;
use crate::prompt::Prompt;

/// A hosted text-generation service. One call, one response, no retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
    fn model(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
        }
    }
}

pub fn create_client(config: &Config) -> Result<Box<dyn CompletionClient>, GenerationError> {
    Ok(Box::new(OpenAiClient::new(ClientConfig::from(config))?))
}
