//! LLM provider port.
//!
//! [`provider::LlmProvider`] is the trait budgie-infra implements;
//! [`box_provider::BoxLlmProvider`] erases the concrete type for runtime
//! provider selection (live Mistral vs. offline canned responses).

pub mod box_provider;
pub mod provider;
