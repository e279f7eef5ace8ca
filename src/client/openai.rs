use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ClientConfig, CompletionClient};
use crate::error::GenerationError;
use crate::prompt::Prompt;

/// Chat-completions client for OpenAI and compatible endpoints
pub struct OpenAiClient {
    config: ClientConfig,
    endpoint: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            config,
            client,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::Authentication(
                    "OpenAI API key not found. Set OPENAI_API_KEY in your environment or .env file"
                        .to_string(),
                )
            })?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.body,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.config.model,
            prompt_chars = prompt.body.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Network(format!(
                        "request to {} timed out after {}s",
                        self.endpoint, self.config.timeout_secs
                    ))
                } else if e.is_connect() {
                    GenerationError::Network(format!("cannot connect to {}", self.endpoint))
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            GenerationError::UnexpectedResponse(format!("failed to parse response: {}", e))
        })?;

        let choice = body.choices.into_iter().next().ok_or_else(|| {
            GenerationError::UnexpectedResponse("response contained no choices".to_string())
        })?;

        if choice.finish_reason.as_deref() == Some("length") {
            tracing::warn!(
                max_tokens = self.config.max_tokens,
                "response hit the max_tokens limit and may be truncated"
            );
        }

        match choice.message.content {
            Some(content) if !content.trim().is_empty() => {
                tracing::debug!(response_chars = content.len(), "completion received");
                Ok(content)
            }
            _ => Err(GenerationError::UnexpectedResponse(
                "response content was empty".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn error_for_status(status: StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.to_string()
            } else {
                trimmed.to_string()
            }
        });

    match status.as_u16() {
        401 | 403 => GenerationError::Authentication(message),
        429 => GenerationError::RateLimit(message),
        408 | 500..=599 => GenerationError::Network(format!("server error ({}): {}", status, message)),
        _ => GenerationError::UnexpectedResponse(format!("HTTP {}: {}", status, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(api_base: &str, api_key: Option<&str>) -> ClientConfig {
        ClientConfig {
            api_base: api_base.to_string(),
            api_key: api_key.map(str::to_string),
            model: "gpt-4o".to_string(),
            max_tokens: 16000,
            temperature: 0.7,
            timeout_secs: 10,
        }
    }

    fn prompt() -> Prompt {
        Prompt {
            system: "You are a writer.",
            body: "Write a pandas cheat sheet.".to_string(),
        }
    }

    fn completion(content: &str, finish_reason: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": finish_reason
            }]
        })
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "max_tokens": 16000,
                "messages": [
                    {"role": "system", "content": "You are a writer."},
                    {"role": "user", "content": "Write a pandas cheat sheet."}
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("# pandas", "stop")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("test-key"))).unwrap();
        let text = client.generate(&prompt()).await.unwrap();
        assert_eq!(text, "# pandas");
    }

    #[tokio::test]
    async fn test_truncated_response_returned_as_is() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion("# pandas\n## Inst", "length")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("k"))).unwrap();
        assert_eq!(client.generate(&prompt()).await.unwrap(), "# pandas\n## Inst");
    }

    #[tokio::test]
    async fn test_missing_key_is_authentication_error() {
        // Never contacted: the key check happens first
        let client = OpenAiClient::new(config("http://127.0.0.1:9", None)).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("bad"))).unwrap();
        match client.generate(&prompt()).await {
            Err(GenerationError::Authentication(msg)) => {
                assert_eq!(msg, "Incorrect API key provided")
            }
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limited_once_without_retry() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached for gpt-4o"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("k"))).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, GenerationError::RateLimit(ref m) if m.contains("Rate limit reached")));
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("k"))).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Network(ref m) if m.contains("upstream unavailable")));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = OpenAiClient::new(config("http://127.0.0.1:1", Some("k"))).unwrap();
        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Network(_)));
    }

    #[tokio::test]
    async fn test_empty_and_malformed_payloads() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ", "stop")))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(config(&mock_server.uri(), Some("k"))).unwrap();
        for _ in 0..3 {
            let err = client.generate(&prompt()).await.unwrap_err();
            assert!(
                matches!(err, GenerationError::UnexpectedResponse(_)),
                "got {:?}",
                err
            );
        }
    }

    #[test]
    fn test_error_for_status_mapping() {
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, ""),
            GenerationError::Authentication(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_REQUEST, "{\"error\":{\"message\":\"bad model\"}}"),
            GenerationError::UnexpectedResponse(ref m) if m.contains("bad model")
        ));
    }
}
