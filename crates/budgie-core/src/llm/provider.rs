//! LlmProvider trait definition.
//!
//! The abstraction the narrative service generates through. Uses native
//! async fn in traits (RPITIT); [`super::box_provider::BoxLlmProvider`]
//! provides the object-safe wrapper.

use budgie_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-generation backends.
///
/// Implementations live in budgie-infra (`MistralProvider`,
/// `CannedProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "mistral").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
