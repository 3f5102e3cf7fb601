//! Application state wiring the registry and narrative service together.
//!
//! Used by both CLI commands and REST API handlers. The provider is chosen
//! at init time: the live Mistral backend (credential required) or the
//! offline canned backend.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use budgie_core::llm::box_provider::BoxLlmProvider;
use budgie_core::narrative::service::{GenerationSettings, NarrativeService};
use budgie_core::scenario::ScenarioRegistry;
use budgie_infra::config::load_config;
use budgie_infra::llm::{CannedProvider, MistralProvider};
use budgie_infra::secret::resolve_api_key;
use budgie_types::config::GlobalConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: GlobalConfig,
    pub registry: Arc<ScenarioRegistry>,
    pub narrative: Arc<NarrativeService>,
}

impl AppState {
    /// Initialize the application state: load config, resolve the
    /// credential, wire the provider, registry, and narrative service.
    ///
    /// A missing `MISTRAL_API_KEY` is fatal here unless `offline` is set.
    pub async fn init(offline: bool) -> anyhow::Result<Self> {
        let config = load_config(Path::new(".")).await;

        let provider = if offline {
            BoxLlmProvider::new(CannedProvider::new())
        } else {
            let api_key = resolve_api_key().context("cannot reach the narrative provider")?;
            BoxLlmProvider::new(
                MistralProvider::new(api_key).with_base_url(config.llm.base_url.clone()),
            )
        };

        let registry = ScenarioRegistry::builtin()?;
        let narrative = NarrativeService::new(provider, GenerationSettings::from(&config.llm));

        Ok(Self {
            config,
            registry: Arc::new(registry),
            narrative: Arc::new(narrative),
        })
    }
}
