//! Business logic for budgie.
//!
//! This crate owns the allocation engine (pure state transitions), the
//! in-memory scenario registry with its event bus, the narrative prompt
//! builder and service, and the `LlmProvider` port that budgie-infra
//! implements. It depends only on `budgie-types` -- never on HTTP or
//! other IO crates.

pub mod engine;
pub mod event;
pub mod llm;
pub mod narrative;
pub mod scenario;
