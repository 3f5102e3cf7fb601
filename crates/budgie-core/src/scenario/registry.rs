//! Slug-indexed registry of live scenario states.
//!
//! Each scenario's state lives in a concurrent map entry; transitions are
//! applied under the entry lock (the engine is synchronous and cheap) and
//! every stored state is broadcast on the event bus. Snapshots are clones;
//! callers never hold references into the map.

use dashmap::DashMap;

use budgie_types::error::{AllocationError, ScenarioError};
use budgie_types::event::ScenarioEvent;
use budgie_types::scenario::{ScenarioDefinition, ScenarioState};
use tokio::sync::broadcast;

use crate::engine;
use crate::event::EventBus;

/// Capacity of the state-change broadcast channel.
const EVENT_CAPACITY: usize = 64;

/// In-memory registry holding one live [`ScenarioState`] per definition.
#[derive(Debug)]
pub struct ScenarioRegistry {
    definitions: Vec<ScenarioDefinition>,
    states: DashMap<String, ScenarioState>,
    events: EventBus,
}

impl ScenarioRegistry {
    /// Build a registry from definitions, initializing every state to the
    /// even split.
    pub fn new(definitions: Vec<ScenarioDefinition>) -> Result<Self, AllocationError> {
        let states = DashMap::with_capacity(definitions.len());
        for definition in &definitions {
            let state =
                engine::initialize(definition.default_budget, definition.categories.clone())?;
            states.insert(definition.slug.clone(), state);
        }
        Ok(Self {
            definitions,
            states,
            events: EventBus::new(EVENT_CAPACITY),
        })
    }

    /// Registry pre-loaded with the built-in scenarios.
    pub fn builtin() -> Result<Self, AllocationError> {
        Self::new(super::defaults::builtin_scenarios())
    }

    /// All definitions, in display order.
    pub fn definitions(&self) -> &[ScenarioDefinition] {
        &self.definitions
    }

    /// Look up a definition by slug.
    pub fn definition(&self, slug: &str) -> Result<&ScenarioDefinition, ScenarioError> {
        self.definitions
            .iter()
            .find(|d| d.slug == slug)
            .ok_or_else(|| ScenarioError::NotFound(slug.to_string()))
    }

    /// Clone the current state of a scenario.
    pub fn snapshot(&self, slug: &str) -> Result<ScenarioState, ScenarioError> {
        self.states
            .get(slug)
            .map(|entry| entry.clone())
            .ok_or_else(|| ScenarioError::NotFound(slug.to_string()))
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ScenarioEvent> {
        self.events.subscribe()
    }

    /// Move one category's slider, rebalancing the rest.
    pub fn allocate(
        &self,
        slug: &str,
        category_id: &str,
        percentage: f64,
    ) -> Result<ScenarioState, ScenarioError> {
        self.apply(slug, |state| engine::allocate(state, category_id, percentage))
    }

    /// Change a scenario's total budget, keeping shares fixed.
    pub fn set_total_budget(
        &self,
        slug: &str,
        new_total: u64,
    ) -> Result<ScenarioState, ScenarioError> {
        self.apply(slug, |state| engine::set_total_budget(state, new_total))
    }

    /// Return a scenario to its even split, clearing the narrative.
    pub fn reset(&self, slug: &str) -> Result<ScenarioState, ScenarioError> {
        self.apply(slug, engine::reset)
    }

    /// Store a generated narrative on the scenario and announce it.
    pub fn set_narrative(
        &self,
        slug: &str,
        narrative: &str,
    ) -> Result<ScenarioState, ScenarioError> {
        let state = self.apply(slug, |state| Ok(engine::set_result(state, narrative)))?;
        self.events.publish(ScenarioEvent::NarrativeReady {
            slug: slug.to_string(),
            narrative: narrative.to_string(),
        });
        Ok(state)
    }

    /// Run a transition against the current state and store the result.
    fn apply<F>(&self, slug: &str, transition: F) -> Result<ScenarioState, ScenarioError>
    where
        F: FnOnce(&ScenarioState) -> Result<ScenarioState, AllocationError>,
    {
        let mut entry = self
            .states
            .get_mut(slug)
            .ok_or_else(|| ScenarioError::NotFound(slug.to_string()))?;
        let next = transition(&entry)?;
        *entry = next.clone();
        drop(entry);

        self.events.publish(ScenarioEvent::StateChanged {
            slug: slug.to_string(),
            state: next.clone(),
        });
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgie_types::event::ScenarioEvent;

    #[test]
    fn builtin_registry_has_three_live_states() {
        let registry = ScenarioRegistry::builtin().unwrap();
        assert_eq!(registry.definitions().len(), 3);
        for definition in registry.definitions() {
            let state = registry.snapshot(&definition.slug).unwrap();
            assert_eq!(state.allocated_total(), definition.default_budget);
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let registry = ScenarioRegistry::builtin().unwrap();
        assert!(matches!(
            registry.snapshot("casino"),
            Err(ScenarioError::NotFound(_))
        ));
        assert!(matches!(
            registry.allocate("casino", "chips", 50.0),
            Err(ScenarioError::NotFound(_))
        ));
    }

    #[test]
    fn allocate_stores_the_new_state() {
        let registry = ScenarioRegistry::builtin().unwrap();
        let after = registry.allocate("movie", "actors", 50.0).unwrap();
        assert_eq!(after.allocation_of("actors"), Some(50_000_000));

        let snapshot = registry.snapshot("movie").unwrap();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn allocation_error_leaves_state_untouched() {
        let registry = ScenarioRegistry::builtin().unwrap();
        let before = registry.snapshot("movie").unwrap();
        let result = registry.allocate("movie", "stunts", 50.0);
        assert!(matches!(
            result,
            Err(ScenarioError::Allocation(AllocationError::UnknownCategory(_)))
        ));
        assert_eq!(registry.snapshot("movie").unwrap(), before);
    }

    #[test]
    fn reset_clears_narrative() {
        let registry = ScenarioRegistry::builtin().unwrap();
        registry.allocate("startup", "legal", 80.0).unwrap();
        registry.set_narrative("startup", "\"Sue first\"").unwrap();
        assert!(registry.snapshot("startup").unwrap().result.is_some());

        let state = registry.reset("startup").unwrap();
        assert!(state.result.is_none());
        assert_eq!(state.allocated_total(), 1_000_000);
    }

    #[tokio::test]
    async fn transitions_publish_events() {
        let registry = ScenarioRegistry::builtin().unwrap();
        let mut rx = registry.subscribe();

        registry.allocate("wedding", "catering", 60.0).unwrap();
        let event = rx.recv().await.unwrap();
        match event {
            ScenarioEvent::StateChanged { slug, state } => {
                assert_eq!(slug, "wedding");
                assert_eq!(state.allocated_total(), 30_000_000);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        registry.set_narrative("wedding", "\"Owambe\"").unwrap();
        // set_narrative publishes StateChanged then NarrativeReady.
        let _ = rx.recv().await.unwrap();
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ScenarioEvent::NarrativeReady { .. }));
    }
}
