//! LLM provider implementations.
//!
//! [`mistral::MistralProvider`] is the production backend;
//! [`canned::CannedProvider`] serves offline demos and tests.

pub mod canned;
pub mod mistral;

pub use canned::CannedProvider;
pub use mistral::MistralProvider;
