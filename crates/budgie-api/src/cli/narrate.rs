//! `narrate` command handler: apply slider edits, then generate.

use anyhow::Context;

use crate::state::AppState;

/// Apply edits to a scenario and print the generated narrative.
pub async fn narrate(
    state: &AppState,
    slug: &str,
    edits: &[String],
    budget: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let definition = state.registry.definition(slug)?.clone();

    if let Some(total) = budget {
        state.registry.set_total_budget(slug, total)?;
    }
    for edit in edits {
        let (category_id, percentage) = parse_edit(edit)?;
        state.registry.allocate(slug, &category_id, percentage)?;
    }

    let snapshot = state.registry.snapshot(slug)?;
    let narrative = state.narrative.generate(&definition, &snapshot).await;
    let stored = state.registry.set_narrative(slug, &narrative)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stored)?);
        return Ok(());
    }

    crate::cli::scenario::show_scenario(&state.registry, slug, false)?;
    Ok(())
}

/// Parse a `CATEGORY=PCT` pair from `--set`.
fn parse_edit(pair: &str) -> anyhow::Result<(String, f64)> {
    let (category_id, raw) = pair
        .split_once('=')
        .with_context(|| format!("invalid --set '{pair}', expected CATEGORY=PCT"))?;
    let percentage: f64 = raw
        .parse()
        .with_context(|| format!("invalid percentage '{raw}' in --set '{pair}'"))?;
    Ok((category_id.to_string(), percentage))
}
