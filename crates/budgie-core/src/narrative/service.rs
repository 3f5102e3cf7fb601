//! One-shot narrative generation with a fixed fallback.
//!
//! The service boundary fully absorbs provider failures: any error is
//! logged and replaced by [`FALLBACK_MESSAGE`], so callers always get a
//! displayable string. No retry, no request deduplication -- concurrent
//! generations run independently and the last stored result wins.

use budgie_types::config::LlmConfig;
use budgie_types::llm::{CompletionRequest, Message, MessageRole};
use budgie_types::scenario::{ScenarioDefinition, ScenarioState};

use crate::llm::box_provider::BoxLlmProvider;
use crate::narrative::prompt::build_prompt;

/// User-facing apology returned when the provider call fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't generate a description at this time. Please try again later.";

/// Fixed generation settings for narrative requests.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl From<&LlmConfig> for GenerationSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Generates scenario narratives through a type-erased provider.
pub struct NarrativeService {
    provider: BoxLlmProvider,
    settings: GenerationSettings,
}

impl NarrativeService {
    pub fn new(provider: BoxLlmProvider, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// The name of the provider behind this service.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate a narrative for the scenario's current allocation.
    ///
    /// Always returns a displayable string: the trimmed generation on
    /// success, [`FALLBACK_MESSAGE`] on any provider failure.
    #[tracing::instrument(
        name = "generate_narrative",
        skip(self, definition, state),
        fields(scenario = %definition.slug, provider = self.provider.name())
    )]
    pub async fn generate(
        &self,
        definition: &ScenarioDefinition,
        state: &ScenarioState,
    ) -> String {
        let prompt = build_prompt(definition, state);
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt,
            }],
            temperature: Some(self.settings.temperature),
            max_tokens: self.settings.max_tokens,
        };

        match self.provider.complete(&request).await {
            Ok(response) => response.content.trim().to_string(),
            Err(err) => {
                tracing::error!(error = %err, "narrative generation failed");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
