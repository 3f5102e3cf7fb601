//! Shared domain types for budgie.
//!
//! This crate contains the core domain types used across the budgie
//! workspace: categories, scenario state and definitions, prompt templates,
//! LLM request/response types, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod event;
pub mod llm;
pub mod narrative;
pub mod scenario;
