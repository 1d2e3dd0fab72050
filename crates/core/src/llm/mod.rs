pub mod error;
pub mod gateway;
pub mod json;

/// One text-generation call: a system framing, the user prompt, and the
/// sampling knobs fixed per endpoint.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A generative text provider. Exactly one attempt per call; callers own
/// all fallback behavior.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, req: GenerateRequest) -> anyhow::Result<String>;
}
