//! Scenario definitions and the live-state registry.

pub mod defaults;
pub mod registry;

pub use registry::ScenarioRegistry;
