use serde::{Deserialize, Serialize};

use crate::{
    config::GeneratorSettings,
    error::{GenerationError, Result},
    prompt::PromptPair,
};

pub const TEMPERATURE: f64 = 0.8;
pub const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    /// Only a plain string counts; content-part arrays and null do not
    #[serde(default)]
    content: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Single-attempt chat-completions client.
pub struct GenerationClient<'a> {
    http: &'a reqwest::Client,
    settings: &'a GeneratorSettings,
}

impl<'a> GenerationClient<'a> {
    pub fn new(http: &'a reqwest::Client, settings: &'a GeneratorSettings) -> Self {
        Self { http, settings }
    }

    /// Request body for the configured model. JSON-object mode is requested
    /// only for model families the policy allows.
    pub fn build_request<'p>(&'p self, prompts: &'p PromptPair) -> ChatRequest<'p> {
        let model = self.settings.model.as_str();
        let response_format = self
            .settings
            .json_mode
            .supports(model)
            .then_some(ResponseFormat {
                kind: "json_object",
            });

        ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format,
        }
    }

    /// Send the prompts and return the raw message content.
    pub async fn send(&self, prompts: &PromptPair) -> Result<String> {
        let request = self.build_request(prompts);

        tracing::debug!(
            provider = self.settings.provider.name(),
            model = request.model,
            json_mode = request.response_format.is_some(),
            "Sending generation request"
        );

        let response = self
            .http
            .post(&self.settings.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Generation response received");

        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| {
                    format!(
                        "{} API error: {} {}",
                        self.settings.provider.name(),
                        status.as_u16(),
                        status.canonical_reason().unwrap_or_default()
                    )
                    .trim_end()
                    .to_string()
                });
            return Err(GenerationError::Provider { message });
        }

        let body = response.json::<ChatResponse>().await?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| match message.content {
                Some(serde_json::Value::String(content)) if !content.is_empty() => Some(content),
                _ => None,
            })
            .ok_or(GenerationError::EmptyResponse)
    }
}
