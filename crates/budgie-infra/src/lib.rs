//! Infrastructure implementations for budgie.
//!
//! Concrete adapters behind the budgie-core ports: the Mistral
//! chat-completions HTTP provider, the offline canned provider, credential
//! resolution from the environment, and the `config.toml` loader.

pub mod config;
pub mod llm;
pub mod secret;
