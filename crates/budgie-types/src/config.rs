//! Global configuration.
//!
//! Deserialized from `config.toml` by budgie-infra. Every field has a
//! default so a missing or partial file still yields a usable config.
//! The provider credential is NOT part of this file; it comes from the
//! environment only.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the budgie binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Generation settings for the narrative provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the chat-completions API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Output length ceiling in tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Bind settings for the REST API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_base_url() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    300
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
