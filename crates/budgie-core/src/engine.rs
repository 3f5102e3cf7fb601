//! Budget allocation engine.
//!
//! Pure state transitions over [`ScenarioState`]: every operation reads an
//! existing state and produces a new one with the engine invariants
//! restored (integer allocations sum exactly to the total budget;
//! percentage shares sum to 100 within [`PERCENT_TOLERANCE`]). Operations
//! validate their preconditions up front and reject without producing a
//! state -- there are no partial failures.
//!
//! Rounding is round-half-up everywhere (`f64::round`; all operands here
//! are non-negative, so half-away-from-zero and half-up coincide). Any
//! result that depends on iteration order walks the category list in
//! declaration order.

use std::collections::{HashMap, HashSet};

use budgie_types::error::AllocationError;
use budgie_types::scenario::{Category, ScenarioState};

/// Tolerance for the percentage-sum invariant.
pub const PERCENT_TOLERANCE: f64 = 0.01;

/// Create a fresh scenario state with an even percentage split.
///
/// Each category receives `100/N` percent. Integer allocations are rounded
/// from the shares; any rounding shortfall or excess lands on the first
/// category so the total stays exact.
pub fn initialize(
    total_budget: u64,
    categories: Vec<Category>,
) -> Result<ScenarioState, AllocationError> {
    if total_budget == 0 {
        return Err(AllocationError::InvalidBudget);
    }
    if categories.is_empty() {
        return Err(AllocationError::EmptyCategories);
    }
    let mut seen = HashSet::new();
    for category in &categories {
        if !seen.insert(category.id.as_str()) {
            return Err(AllocationError::DuplicateCategory(category.id.clone()));
        }
    }

    let even = 100.0 / categories.len() as f64;
    let mut percentages = HashMap::with_capacity(categories.len());
    let mut allocations = HashMap::with_capacity(categories.len());
    for category in &categories {
        percentages.insert(category.id.clone(), even);
        allocations.insert(category.id.clone(), to_amount(even, total_budget));
    }

    let allocated: u64 = allocations.values().sum();
    if allocated != total_budget {
        let diff = total_budget as i64 - allocated as i64;
        if let Some(amount) = allocations.get_mut(&categories[0].id) {
            *amount = apply_diff(*amount, diff);
        }
    }

    Ok(ScenarioState {
        total_budget,
        categories,
        allocations,
        percentages,
        result: None,
    })
}

/// Move one category to a new percentage, rebalancing the others.
///
/// The difference is distributed across the other categories in proportion
/// to their current shares (a larger share absorbs more of the change),
/// each clamped at 0. If clamping pushed the total off 100 by more than
/// [`PERCENT_TOLERANCE`], every share is rescaled by `100/sum`. Shares are
/// clamped individually first, then rescaled globally; repeated edits near
/// 0% depend on this order.
///
/// Setting a category to its current stored percentage is an exact no-op.
/// Dragging the sole funded category to 0 is also a no-op: the rescale
/// divisor would be 0 and the invariants could not be restored.
pub fn allocate(
    state: &ScenarioState,
    category_id: &str,
    new_percentage: f64,
) -> Result<ScenarioState, AllocationError> {
    if !(0.0..=100.0).contains(&new_percentage) {
        return Err(AllocationError::PercentageOutOfRange(new_percentage));
    }
    let Some(old_percentage) = state.percentage_of(category_id) else {
        return Err(AllocationError::UnknownCategory(category_id.to_string()));
    };

    let delta = new_percentage - old_percentage;
    if delta == 0.0 {
        return Ok(state.clone());
    }

    tracing::debug!(
        category = category_id,
        from = old_percentage,
        to = new_percentage,
        "rebalancing allocation"
    );

    let mut percentages = state.percentages.clone();
    percentages.insert(category_id.to_string(), new_percentage);

    let others_total: f64 = state
        .categories
        .iter()
        .filter(|c| c.id != category_id)
        .filter_map(|c| state.percentage_of(&c.id))
        .sum();

    if others_total > 0.0 {
        for category in state.categories.iter().filter(|c| c.id != category_id) {
            let current = state.percentage_of(&category.id).unwrap_or(0.0);
            let proportion = current / others_total;
            let reduced = (current - delta * proportion).max(0.0);
            percentages.insert(category.id.clone(), reduced);
        }
    }

    let total_percentage: f64 = percentages.values().sum();
    if (total_percentage - 100.0).abs() > PERCENT_TOLERANCE {
        if total_percentage <= 0.0 {
            // Sole funded category dragged to 0: nothing left to rescale.
            return Ok(state.clone());
        }
        let factor = 100.0 / total_percentage;
        for share in percentages.values_mut() {
            *share *= factor;
        }
    }

    let allocations = rebalanced_allocations(&state.categories, &percentages, state.total_budget);

    Ok(ScenarioState {
        total_budget: state.total_budget,
        categories: state.categories.clone(),
        allocations,
        percentages,
        result: state.result.clone(),
    })
}

/// Change the total budget, keeping percentage shares fixed.
///
/// Allocations are recomputed from the unchanged shares with the same
/// round-then-correct-largest scheme as [`allocate`].
pub fn set_total_budget(
    state: &ScenarioState,
    new_total: u64,
) -> Result<ScenarioState, AllocationError> {
    if new_total == 0 {
        return Err(AllocationError::InvalidBudget);
    }

    tracing::debug!(from = state.total_budget, to = new_total, "changing total budget");

    let allocations = rebalanced_allocations(&state.categories, &state.percentages, new_total);

    Ok(ScenarioState {
        total_budget: new_total,
        categories: state.categories.clone(),
        allocations,
        percentages: state.percentages.clone(),
        result: state.result.clone(),
    })
}

/// Return to the even split, clearing any stored narrative.
pub fn reset(state: &ScenarioState) -> Result<ScenarioState, AllocationError> {
    initialize(state.total_budget, state.categories.clone())
}

/// Store a generated narrative (or the failure placeholder).
///
/// Pure field update; allocations and percentages are untouched.
pub fn set_result(state: &ScenarioState, result: impl Into<String>) -> ScenarioState {
    ScenarioState {
        result: Some(result.into()),
        ..state.clone()
    }
}

/// Convert a percentage share to an integer amount, round-half-up.
fn to_amount(percentage: f64, total_budget: u64) -> u64 {
    (percentage / 100.0 * total_budget as f64).round() as u64
}

fn apply_diff(amount: u64, diff: i64) -> u64 {
    (amount as i64 + diff).max(0) as u64
}

/// Convert all shares to integer allocations summing exactly to the total.
///
/// Any rounding discrepancy is added, signed, to the first category (in
/// declaration order) holding the largest allocation.
fn rebalanced_allocations(
    categories: &[Category],
    percentages: &HashMap<String, f64>,
    total_budget: u64,
) -> HashMap<String, u64> {
    let mut allocations = HashMap::with_capacity(categories.len());
    for category in categories {
        let share = percentages.get(&category.id).copied().unwrap_or(0.0);
        allocations.insert(category.id.clone(), to_amount(share, total_budget));
    }

    let allocated: u64 = allocations.values().sum();
    if allocated != total_budget {
        let diff = total_budget as i64 - allocated as i64;
        let mut largest: Option<(&str, u64)> = None;
        for category in categories {
            let amount = allocations.get(&category.id).copied().unwrap_or(0);
            match largest {
                Some((_, best)) if amount <= best => {}
                _ => largest = Some((category.id.as_str(), amount)),
            }
        }
        if let Some((id, _)) = largest {
            if let Some(amount) = allocations.get_mut(id) {
                *amount = apply_diff(*amount, diff);
            }
        }
    }

    allocations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(ids: &[&str]) -> Vec<Category> {
        ids.iter()
            .map(|id| Category::new(*id, format!("Category {id}"), "💰"))
            .collect()
    }

    fn movie_categories() -> Vec<Category> {
        vec![
            Category::new("actors", "Actors & Cast", "🎭"),
            Category::new("visualEffects", "Visual Effects", "✨"),
            Category::new("production", "Production & Sets", "🏗️"),
            Category::new("marketing", "Marketing", "📢"),
            Category::new("writing", "Script & Writing", "📝"),
            Category::new("music", "Music & Sound", "🎵"),
        ]
    }

    fn assert_invariants(state: &ScenarioState) {
        assert_eq!(
            state.allocated_total(),
            state.total_budget,
            "allocations must sum to the total budget"
        );
        assert!(
            (state.percentage_total() - 100.0).abs() <= PERCENT_TOLERANCE + 1e-9,
            "percentages must sum to 100, got {}",
            state.percentage_total()
        );
        assert_eq!(state.allocations.len(), state.categories.len());
        assert_eq!(state.percentages.len(), state.categories.len());
        for category in &state.categories {
            assert!(state.allocations.contains_key(&category.id));
            assert!(state.percentages.contains_key(&category.id));
        }
    }

    #[test]
    fn initialize_even_split_exact_total() {
        let state = initialize(100_000_000, movie_categories()).unwrap();
        assert_invariants(&state);

        // 16,666,667 rounded up six times overshoots by 2; the first
        // category absorbs the correction.
        assert_eq!(state.allocation_of("actors"), Some(16_666_665));
        for id in ["visualEffects", "production", "marketing", "writing", "music"] {
            assert_eq!(state.allocation_of(id), Some(16_666_667));
        }
        assert!((state.percentage_of("music").unwrap() - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn initialize_correction_goes_to_first_category() {
        // 50.5 rounds up for both categories; the overshoot lands on the first.
        let state = initialize(101, categories(&["a", "b"])).unwrap();
        assert_invariants(&state);
        assert_eq!(state.allocation_of("a"), Some(50));
        assert_eq!(state.allocation_of("b"), Some(51));
    }

    #[test]
    fn initialize_single_category() {
        let state = initialize(1_000_000, categories(&["solo"])).unwrap();
        assert_invariants(&state);
        assert_eq!(state.allocation_of("solo"), Some(1_000_000));
        assert!((state.percentage_of("solo").unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn initialize_percent_sum_within_tolerance_for_many_sizes() {
        for n in 1..=10 {
            let ids: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let state = initialize(1_000, categories(&refs)).unwrap();
            assert_invariants(&state);
        }
    }

    #[test]
    fn initialize_rejects_bad_input() {
        assert!(matches!(
            initialize(0, categories(&["a"])),
            Err(AllocationError::InvalidBudget)
        ));
        assert!(matches!(
            initialize(100, vec![]),
            Err(AllocationError::EmptyCategories)
        ));
        assert!(matches!(
            initialize(100, categories(&["a", "a"])),
            Err(AllocationError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn allocate_same_percentage_is_noop() {
        let state = initialize(100_000_000, movie_categories()).unwrap();
        let current = state.percentage_of("actors").unwrap();
        let after = allocate(&state, "actors", current).unwrap();
        assert_eq!(after, state);
    }

    #[test]
    fn allocate_even_split_to_fifty() {
        let state = initialize(100_000_000, movie_categories()).unwrap();
        let after = allocate(&state, "actors", 50.0).unwrap();
        assert_invariants(&after);

        assert_eq!(after.allocation_of("actors"), Some(50_000_000));
        assert!((after.percentage_of("actors").unwrap() - 50.0).abs() < 1e-9);
        // The other five shrink proportionally from ~16.67% to 10% each.
        for id in ["visualEffects", "production", "marketing", "writing", "music"] {
            assert_eq!(after.allocation_of(id), Some(10_000_000));
            assert!((after.percentage_of(id).unwrap() - 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn allocate_larger_shares_absorb_more() {
        let state = initialize(10_000, categories(&["a", "b", "c"])).unwrap();
        // Skew the state first: a=50, leaving b=c=25.
        let state = allocate(&state, "a", 50.0).unwrap();
        // Now shrink c to 5: a (2x the share of b) must lose 2x as much.
        let after = allocate(&state, "c", 5.0).unwrap();
        assert_invariants(&after);

        let lost_a = state.percentage_of("a").unwrap() - after.percentage_of("a").unwrap();
        let lost_b = state.percentage_of("b").unwrap() - after.percentage_of("b").unwrap();
        assert!((lost_a / lost_b - 2.0).abs() < 1e-6);
    }

    #[test]
    fn allocate_rejects_bad_input() {
        let state = initialize(100, categories(&["a", "b"])).unwrap();
        assert!(matches!(
            allocate(&state, "missing", 10.0),
            Err(AllocationError::UnknownCategory(_))
        ));
        assert!(matches!(
            allocate(&state, "a", -0.5),
            Err(AllocationError::PercentageOutOfRange(_))
        ));
        assert!(matches!(
            allocate(&state, "a", 100.1),
            Err(AllocationError::PercentageOutOfRange(_))
        ));
    }

    #[test]
    fn allocate_sequence_preserves_invariants() {
        let mut state = initialize(30_000_000, movie_categories()).unwrap();
        let edits = [
            ("actors", 80.0),
            ("music", 15.0),
            ("marketing", 0.0),
            ("writing", 99.5),
            ("actors", 0.25),
            ("visualEffects", 33.3),
            ("production", 66.6),
            ("music", 0.0),
        ];
        for (id, pct) in edits {
            state = allocate(&state, id, pct).unwrap();
            assert_invariants(&state);
        }
    }

    #[test]
    fn allocate_to_full_budget_zeroes_the_rest() {
        let state = initialize(1_000_000, categories(&["a", "b", "c"])).unwrap();
        let after = allocate(&state, "a", 100.0).unwrap();
        assert_invariants(&after);
        assert_eq!(after.allocation_of("a"), Some(1_000_000));
        assert_eq!(after.allocation_of("b"), Some(0));
        assert_eq!(after.allocation_of("c"), Some(0));
    }

    #[test]
    fn allocate_with_zeroed_others_snaps_back_to_full() {
        // One category holds 100%; the others have nothing to give up, so
        // lowering it just renormalizes the edit back to 100%.
        let state = initialize(1_000_000, categories(&["a", "b", "c"])).unwrap();
        let state = allocate(&state, "a", 100.0).unwrap();
        let after = allocate(&state, "a", 40.0).unwrap();
        assert_invariants(&after);
        assert!((after.percentage_of("a").unwrap() - 100.0).abs() < 1e-9);
        assert_eq!(after.allocation_of("a"), Some(1_000_000));
    }

    #[test]
    fn allocate_funds_a_zeroed_category_from_the_funded_one() {
        let state = initialize(1_000_000, categories(&["a", "b", "c"])).unwrap();
        let state = allocate(&state, "a", 100.0).unwrap();
        let after = allocate(&state, "b", 30.0).unwrap();
        assert_invariants(&after);
        assert!((after.percentage_of("a").unwrap() - 70.0).abs() < 1e-9);
        assert!((after.percentage_of("b").unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(after.allocation_of("c"), Some(0));
    }

    #[test]
    fn allocate_sole_funded_to_zero_is_noop() {
        let state = initialize(1_000_000, categories(&["a", "b", "c"])).unwrap();
        let state = allocate(&state, "a", 100.0).unwrap();
        let after = allocate(&state, "a", 0.0).unwrap();
        assert_eq!(after, state);
    }

    #[test]
    fn allocate_clamps_negative_shares_at_zero() {
        // Hand-built state whose shares sum to slightly under 100: pushing
        // the edit to the full 100 drives the others fractionally negative,
        // which must clamp to 0 rather than go below.
        let cats = categories(&["a", "b", "c"]);
        let mut percentages = HashMap::new();
        percentages.insert("a".to_string(), 49.995);
        percentages.insert("b".to_string(), 30.0);
        percentages.insert("c".to_string(), 20.0);
        let mut allocations = HashMap::new();
        allocations.insert("a".to_string(), 50_000);
        allocations.insert("b".to_string(), 30_000);
        allocations.insert("c".to_string(), 20_000);
        let state = ScenarioState {
            total_budget: 100_000,
            categories: cats,
            allocations,
            percentages,
            result: None,
        };

        let after = allocate(&state, "a", 100.0).unwrap();
        assert_invariants(&after);
        assert_eq!(after.percentage_of("b"), Some(0.0));
        assert_eq!(after.percentage_of("c"), Some(0.0));
        assert_eq!(after.allocation_of("a"), Some(100_000));
    }

    #[test]
    fn allocate_rounding_correction_lands_on_largest() {
        let state = initialize(10, categories(&["a", "b", "c"])).unwrap();
        let state = allocate(&state, "a", 50.0).unwrap();
        // a=45, b=c=27.5: the raw roundings (5, 3, 3) overshoot by one unit
        // and the largest allocation absorbs it.
        let after = allocate(&state, "a", 45.0).unwrap();
        assert_invariants(&after);
        assert_eq!(after.allocation_of("a"), Some(4));
        assert_eq!(after.allocation_of("b"), Some(3));
        assert_eq!(after.allocation_of("c"), Some(3));
    }

    #[test]
    fn allocate_does_not_touch_budget_or_categories() {
        let state = initialize(5_000, categories(&["a", "b"])).unwrap();
        let after = allocate(&state, "b", 75.0).unwrap();
        assert_eq!(after.total_budget, state.total_budget);
        assert_eq!(after.categories, state.categories);
    }

    #[test]
    fn set_total_budget_preserves_percentages() {
        let state = initialize(100_000_000, movie_categories()).unwrap();
        let state = allocate(&state, "actors", 50.0).unwrap();
        let after = set_total_budget(&state, 40_000_000).unwrap();
        assert_invariants(&after);

        assert_eq!(after.percentages, state.percentages);
        assert_eq!(after.allocation_of("actors"), Some(20_000_000));
        assert_eq!(after.allocation_of("music"), Some(4_000_000));
    }

    #[test]
    fn set_total_budget_rejects_zero() {
        let state = initialize(100, categories(&["a"])).unwrap();
        assert!(matches!(
            set_total_budget(&state, 0),
            Err(AllocationError::InvalidBudget)
        ));
    }

    #[test]
    fn reset_returns_even_split_and_clears_result() {
        let state = initialize(100_000_000, movie_categories()).unwrap();
        let edited = allocate(&state, "marketing", 90.0).unwrap();
        let edited = set_result(&edited, "\"ALL ADS, NO MOVIE\"");
        let back = reset(&edited).unwrap();
        assert_eq!(back, state);
        assert!(back.result.is_none());
    }

    #[test]
    fn set_result_only_touches_result() {
        let state = initialize(100, categories(&["a", "b"])).unwrap();
        let after = set_result(&state, "a narrative");
        assert_eq!(after.result.as_deref(), Some("a narrative"));
        assert_eq!(after.allocations, state.allocations);
        assert_eq!(after.percentages, state.percentages);
    }
}
