//! Scenario lifecycle events.
//!
//! Published on the core event bus whenever a scenario's state changes.
//! Subscribers are optional and events carry full state snapshots.

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioState;

/// An observable change to a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// An allocation edit, budget change, or reset produced a new state.
    StateChanged {
        slug: String,
        state: ScenarioState,
    },

    /// A narrative was generated (or the failure placeholder stored).
    NarrativeReady {
        slug: String,
        narrative: String,
    },
}

impl ScenarioEvent {
    /// The slug of the scenario this event concerns.
    pub fn slug(&self) -> &str {
        match self {
            ScenarioEvent::StateChanged { slug, .. } => slug,
            ScenarioEvent::NarrativeReady { slug, .. } => slug,
        }
    }
}
