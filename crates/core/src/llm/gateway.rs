use crate::config::Settings;
use crate::llm::error::GatewayError;
use crate::llm::{GenerateRequest, TextGenerator};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for an OpenAI-compatible chat-completions gateway with
/// bearer-token auth. One request per generation, no retries.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GatewayClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_gateway_api_key()?.to_string();
        let base_url = settings
            .gateway_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = settings
            .gateway_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build gateway http client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for GatewayClient {
    async fn generate(&self, req: GenerateRequest) -> anyhow::Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: req.system,
                },
                ChatMessage {
                    role: "user",
                    content: req.prompt,
                },
            ],
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };

        let res = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("gateway request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read gateway response body")?;
        if !status.is_success() {
            return Err(GatewayError {
                stage: "http",
                detail: format!("status={status}"),
                raw_output: Some(text),
            }
            .into());
        }

        let parsed = serde_json::from_str::<ChatCompletionResponse>(&text).map_err(|e| {
            GatewayError {
                stage: "decode",
                detail: format!("invalid completion payload: {e}"),
                raw_output: Some(text.clone()),
            }
        })?;

        // Take the first completion's content.
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|s| !s.trim().is_empty());

        match content {
            Some(content) => Ok(content),
            None => Err(GatewayError {
                stage: "decode",
                detail: "completion has no message content".to_string(),
                raw_output: Some(text),
            }
            .into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
