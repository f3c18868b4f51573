//! OpenAI-compatible gateway for advisory generation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `AdvisoryGateway` with a single plain-text chat completion per call.

use crate::adapters::ai::prompts;
use crate::domain::{DomainError, DomainSnapshot};
use crate::ports::AdvisoryGateway;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible advisory gateway.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key; blank means unconfigured and every call fails fast
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `timeout` - Whole-request timeout
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Provider(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    fn build_request(&self, snapshot: &DomainSnapshot) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompts::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompts::user_prompt(snapshot),
                },
            ],
            temperature: 0.7,
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl AdvisoryGateway for OpenAiAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    async fn invoke(&self, snapshot: &DomainSnapshot) -> Result<String, DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::ProviderUnavailable);
        }

        info!(
            context = snapshot.kind(),
            model = %self.model,
            "requesting advisory from provider"
        );

        let request = self.build_request(snapshot);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("Failed to parse API response: {}", e)))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| DomainError::Provider("No response choices returned".to_string()))?;

        if text.is_empty() {
            return Err(DomainError::Provider("Empty completion".to_string()));
        }

        debug!(text_len = text.len(), "received advisory from provider");

        Ok(text)
    }
}
