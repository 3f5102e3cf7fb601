//! Scenario domain types.
//!
//! A scenario is one fixed budgeting context (movie, wedding, startup):
//! a total budget, an ordered set of categories, and the prompt template
//! used for narrative generation. [`ScenarioState`] is the live allocation
//! state the engine transitions over.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::narrative::PromptTemplate;

/// A single budget category with immutable identity.
///
/// The category set of a scenario is fixed at definition time and never
/// changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id within the scenario (e.g., "actors").
    pub id: String,
    /// Display name (e.g., "Actors & Cast").
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Live allocation state for one scenario.
///
/// Invariants after every completed engine transition:
/// - allocations sum to exactly `total_budget`
/// - percentages sum to 100 within a 0.01 tolerance
/// - both maps are keyed by exactly the ids in `categories`
///
/// Anything that depends on iteration order (rounding correction,
/// tie-breaks) walks `categories` in declaration order, never the maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioState {
    /// Total budget in whole currency units. Always positive.
    pub total_budget: u64,
    /// Ordered category set. Immutable for the lifetime of the state.
    pub categories: Vec<Category>,
    /// Integer currency amount per category id.
    pub allocations: HashMap<String, u64>,
    /// Percentage share per category id, tracked independently from
    /// allocations for precision during edits.
    pub percentages: HashMap<String, f64>,
    /// Generated narrative (or the failure placeholder), if any.
    pub result: Option<String>,
}

impl ScenarioState {
    /// Sum of all integer allocations.
    pub fn allocated_total(&self) -> u64 {
        self.allocations.values().sum()
    }

    /// Sum of all percentage shares.
    pub fn percentage_total(&self) -> f64 {
        self.percentages.values().sum()
    }

    /// Stored percentage for a category, if it exists.
    pub fn percentage_of(&self, category_id: &str) -> Option<f64> {
        self.percentages.get(category_id).copied()
    }

    /// Stored allocation for a category, if it exists.
    pub fn allocation_of(&self, category_id: &str) -> Option<u64> {
        self.allocations.get(category_id).copied()
    }
}

/// A named scenario configuration record.
///
/// The three built-ins (movie, wedding, startup) are plain data fed to one
/// generic constructor; there are no per-scenario code paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// URL-safe identifier (e.g., "movie").
    pub slug: String,
    /// Human-readable title (e.g., "Movie Production").
    pub title: String,
    /// Starting total budget in whole currency units.
    pub default_budget: u64,
    /// Ordered category set.
    pub categories: Vec<Category>,
    /// Fixed tone/label/currency configuration for narrative prompts.
    pub prompt: PromptTemplate,
}

/// Request body for a slider edit: move one category to a new percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationUpdate {
    pub category_id: String,
    pub percentage: f64,
}

/// Request body for changing a scenario's total budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUpdate {
    pub total_budget: u64,
}
