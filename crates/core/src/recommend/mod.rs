//! The normalization pipeline shared by the three generator endpoints:
//! build a prompt, make one model call, recover JSON from whatever came
//! back, and substitute the deterministic default batch when any stage
//! fails. Only the ideas endpoint gets a prose-salvage pass between a
//! parse failure and the hard default.

pub mod prompt;
pub mod salvage;

use crate::config::Settings;
use crate::domain::course::default_courses;
use crate::domain::idea::default_ideas;
use crate::domain::trending::default_trending;
use crate::llm::gateway::GatewayClient;
use crate::llm::json::{decode_batch, Decoded};
use crate::llm::{GenerateRequest, TextGenerator};
use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// An ordered batch of recommendation records, model order preserved.
/// Records are raw JSON values: field-level content is passed through to
/// the client untouched.
pub type Batch = Vec<Value>;

pub struct Recommender {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl Recommender {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// Builds the gateway-backed recommender. A missing credential is not
    /// fatal here: the service starts in degraded mode and serves default
    /// batches, except where an endpoint's contract surfaces the error.
    pub fn from_settings(settings: &Settings) -> Self {
        match GatewayClient::from_settings(settings) {
            Ok(client) => Self::new(Some(Arc::new(client))),
            Err(e) => {
                tracing::error!(error = %e, "text generator not configured; serving default batches");
                Self::new(None)
            }
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    async fn complete(&self, req: GenerateRequest) -> anyhow::Result<String> {
        let generator = self
            .generator
            .as_ref()
            .context("text generator is not configured")?;
        generator.generate(req).await
    }

    /// Monetization ideas for a hobby. Infallible: every failure mode
    /// degrades, with prose salvage tried before the hard default.
    pub async fn hobby_ideas(&self, hobby: &str) -> Batch {
        let req = GenerateRequest {
            system: prompt::ideas_system(),
            prompt: prompt::ideas_prompt(hobby),
            temperature: prompt::IDEAS_TEMPERATURE,
            max_tokens: prompt::MAX_OUTPUT_TOKENS,
        };

        match self.complete(req).await {
            // The rng must not be held across the await.
            Ok(text) => normalize_ideas(&text, hobby, &mut rand::thread_rng()),
            Err(e) => {
                tracing::warn!(hobby, error = %e, "ideas generation failed; using default batch");
                to_batch(&default_ideas(hobby))
            }
        }
    }

    /// Course recommendations for a hobby. A missing credential surfaces
    /// as an error (this endpoint's contract); upstream, parse, and shape
    /// failures all degrade to the default batch.
    pub async fn course_recommendations(&self, hobby: &str) -> anyhow::Result<Batch> {
        let generator = self
            .generator
            .as_ref()
            .context("GATEWAY_API_KEY is not configured")?;

        let req = GenerateRequest {
            system: prompt::courses_system(),
            prompt: prompt::courses_prompt(hobby),
            temperature: prompt::COURSES_TEMPERATURE,
            max_tokens: prompt::MAX_OUTPUT_TOKENS,
        };

        let text = match generator.generate(req).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(hobby, error = %e, "course generation failed; using default batch");
                return Ok(to_batch(&default_courses(hobby)));
            }
        };

        match decode_batch(&text) {
            Decoded::Batch(items) => Ok(items),
            decoded => {
                tracing::warn!(hobby, ?decoded, "course output unusable; using default batch");
                Ok(to_batch(&default_courses(hobby)))
            }
        }
    }

    /// Trending hobbies list. Infallible; no topic, no salvage.
    pub async fn trending_hobbies(&self) -> Batch {
        let req = GenerateRequest {
            system: prompt::trending_system(),
            prompt: prompt::trending_prompt(),
            temperature: prompt::TRENDING_TEMPERATURE,
            max_tokens: prompt::MAX_OUTPUT_TOKENS,
        };

        let text = match self.complete(req).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "trending generation failed; using default batch");
                return to_batch(&default_trending());
            }
        };

        match decode_batch(&text) {
            Decoded::Batch(items) => items,
            decoded => {
                tracing::warn!(?decoded, "trending output unusable; using default batch");
                to_batch(&default_trending())
            }
        }
    }
}

/// Decodes raw ideas-endpoint model text into a batch. Salvage icons come
/// from the injected rng; seed it to make the output deterministic.
pub fn normalize_ideas<R: Rng>(text: &str, hobby: &str, rng: &mut R) -> Batch {
    match decode_batch(text) {
        Decoded::Batch(items) => items,
        Decoded::Unparseable => {
            tracing::warn!(hobby, "ideas output was not JSON; salvaging prose lines");
            let salvaged = salvage::salvage_ideas(text, hobby, rng);
            if salvaged.is_empty() {
                to_batch(&default_ideas(hobby))
            } else {
                to_batch(&salvaged)
            }
        }
        Decoded::WrongShape => {
            tracing::warn!(hobby, "ideas output had the wrong shape; using default batch");
            to_batch(&default_ideas(hobby))
        }
    }
}

fn to_batch<T: Serialize>(records: &[T]) -> Batch {
    records
        .iter()
        .map(|r| serde_json::to_value(r).expect("record serialization is infallible"))
        .collect()
}
