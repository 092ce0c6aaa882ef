//! Groq provider implementation.
//!
//! Text generation through Groq's OpenAI-compatible chat-completions API.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Groq API base URL.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Groq provider configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
}

/// Groq text provider.
pub struct GroqTextProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqTextProvider {
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl TextProvider for GroqTextProvider {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Groq API key not set".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let url = format!("{}/chat/completions", GROQ_API_BASE);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Groq API error {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .choices
            .first()
            .and_then(|c| c.message.content.clone());

        let usage = api_response.usage.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<i32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: i32,
    #[serde(default)]
    completion_tokens: i32,
}
