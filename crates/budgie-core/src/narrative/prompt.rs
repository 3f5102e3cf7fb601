//! Prompt assembly for narrative generation.
//!
//! Projects a completed allocation into the fixed prompt shape of its
//! scenario template: persona, formatted total, percentage breakdown under
//! the category display names, tone instructions, the quoted title/tagline
//! demand, and the output-length ceiling.

use budgie_types::scenario::{ScenarioDefinition, ScenarioState};

/// Output-length ceiling stated in every prompt.
const RESPONSE_CHAR_LIMIT: u32 = 300;

/// Display percentage for one category: its allocation as a share of the
/// total, rounded half-up.
///
/// Computed from the integer allocations, independently of the engine's
/// stored percentages; the two may differ by up to one point because the
/// rounding paths are separate. Accepted, not reconciled.
pub fn display_percentage(allocation: u64, total_budget: u64) -> u32 {
    (allocation as f64 / total_budget as f64 * 100.0).round() as u32
}

/// Build the full generation prompt for a scenario's current allocation.
pub fn build_prompt(definition: &ScenarioDefinition, state: &ScenarioState) -> String {
    let template = &definition.prompt;
    let mut lines = Vec::with_capacity(state.categories.len() + 8);

    lines.push(template.persona.clone());
    lines.push(format!(
        "{}: {}.",
        template.budget_label,
        template.budget_format.format(state.total_budget)
    ));
    lines.push(String::new());
    lines.push("Budget breakdown:".to_string());
    for category in &state.categories {
        let allocation = state.allocation_of(&category.id).unwrap_or(0);
        let pct = display_percentage(allocation, state.total_budget);
        lines.push(format!("- {}: {pct}%", category.name));
    }
    lines.push(String::new());
    lines.push(format!(
        "Give a humorous 2-paragraph description of {} based on this budget allocation.",
        template.subject
    ));
    lines.extend(template.focus_lines.iter().cloned());
    lines.push(format!(
        "Include {} in quotation marks.",
        template.quoted_item
    ));
    lines.push(format!(
        "Keep your response under {RESPONSE_CHAR_LIMIT} characters."
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::scenario::defaults;

    #[test]
    fn test_display_percentage_rounds_half_up() {
        assert_eq!(display_percentage(0, 100), 0);
        assert_eq!(display_percentage(100, 100), 100);
        assert_eq!(display_percentage(165, 1000), 17); // 16.5 -> 17
        assert_eq!(display_percentage(164, 1000), 16);
    }

    #[test]
    fn test_display_percentage_independent_of_stored_shares() {
        let definition = defaults::movie();
        let state =
            engine::initialize(definition.default_budget, definition.categories.clone()).unwrap();
        // Stored share is 16.67%; the display path rounds the corrected
        // integer allocation instead and both land on 17 here.
        let pct = display_percentage(
            state.allocation_of("actors").unwrap(),
            state.total_budget,
        );
        assert_eq!(pct, 17);
    }

    #[test]
    fn test_movie_prompt_shape() {
        let definition = defaults::movie();
        let state =
            engine::initialize(definition.default_budget, definition.categories.clone()).unwrap();
        let state = engine::allocate(&state, "actors", 50.0).unwrap();

        let prompt = build_prompt(&definition, &state);
        assert!(prompt.starts_with("You are a witty Hollywood insider"));
        assert!(prompt.contains("Total budget: $100 million."));
        assert!(prompt.contains("Budget breakdown:"));
        assert!(prompt.contains("- Actors & Cast: 50%"));
        assert!(prompt.contains("- Music & Sound: 10%"));
        assert!(prompt.contains("humorous 2-paragraph description"));
        assert!(prompt.contains("a punchy title for this movie in quotation marks"));
        assert!(prompt.contains("under 300 characters"));
    }

    #[test]
    fn test_wedding_prompt_currency_formatting() {
        let definition = defaults::wedding();
        let state =
            engine::initialize(definition.default_budget, definition.categories.clone()).unwrap();
        let prompt = build_prompt(&definition, &state);
        assert!(prompt.contains("Total budget: ₦30.0 million."));
        assert!(prompt.contains("Nigerian wedding planner"));
        assert!(prompt.contains("a punchy tagline for this wedding"));
    }

    #[test]
    fn test_startup_prompt_grouped_funding() {
        let definition = defaults::startup();
        let state =
            engine::initialize(definition.default_budget, definition.categories.clone()).unwrap();
        let prompt = build_prompt(&definition, &state);
        assert!(prompt.contains("Total funding: $1,000,000."));
        assert!(prompt.contains("how this startup would fare"));
        assert!(prompt.contains("succeed or fail"));
        assert!(prompt.contains("a punchy company slogan"));
    }
}
