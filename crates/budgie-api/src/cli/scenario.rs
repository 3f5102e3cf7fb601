//! `scenarios` and `show` command handlers.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};

use budgie_core::scenario::ScenarioRegistry;
use budgie_types::narrative::group_thousands;

/// List the built-in scenarios.
pub fn list_scenarios(registry: &ScenarioRegistry, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry.definitions())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Slug", "Title", "Budget", "Categories"]);
    for definition in registry.definitions() {
        let names: Vec<&str> = definition
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        table.add_row([
            Cell::new(&definition.slug),
            Cell::new(&definition.title),
            Cell::new(definition.prompt.budget_format.format(definition.default_budget)),
            Cell::new(names.join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Show a scenario's current allocation breakdown.
pub fn show_scenario(registry: &ScenarioRegistry, slug: &str, json: bool) -> anyhow::Result<()> {
    let definition = registry.definition(slug)?;
    let state = registry.snapshot(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} -- total {}",
        console::style("💰").bold(),
        console::style(&definition.title).cyan(),
        console::style(definition.prompt.budget_format.format(state.total_budget)).bold()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Category", "Share", "Amount"]);
    for category in &state.categories {
        let share = state.percentage_of(&category.id).unwrap_or(0.0);
        let amount = state.allocation_of(&category.id).unwrap_or(0);
        table.add_row([
            Cell::new(format!("{} {}", category.icon, category.name)),
            Cell::new(format!("{share:.1}%")),
            Cell::new(group_thousands(amount)),
        ]);
    }
    println!("{table}");

    if let Some(result) = &state.result {
        println!();
        println!("  {result}");
    }
    Ok(())
}
