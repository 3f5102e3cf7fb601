//! Built-in scenario definitions.
//!
//! The three shipped scenarios as plain configuration records. Budgets are
//! whole currency units; category ids are stable API identifiers while
//! names are what both the UI and the narrative prompts display.

use budgie_types::narrative::{BudgetFormat, PromptTemplate};
use budgie_types::scenario::{Category, ScenarioDefinition};

/// All built-in scenarios, in display order.
pub fn builtin_scenarios() -> Vec<ScenarioDefinition> {
    vec![movie(), wedding(), startup()]
}

/// Movie production, $100 million default budget.
pub fn movie() -> ScenarioDefinition {
    ScenarioDefinition {
        slug: "movie".to_string(),
        title: "Movie Production".to_string(),
        default_budget: 100_000_000,
        categories: vec![
            Category::new("actors", "Actors & Cast", "🎭"),
            Category::new("visualEffects", "Visual Effects", "✨"),
            Category::new("production", "Production & Sets", "🏗️"),
            Category::new("marketing", "Marketing", "📢"),
            Category::new("writing", "Script & Writing", "📝"),
            Category::new("music", "Music & Sound", "🎵"),
        ],
        prompt: PromptTemplate {
            persona: "You are a witty Hollywood insider analyzing a movie budget.".to_string(),
            budget_label: "Total budget".to_string(),
            budget_format: BudgetFormat::WholeMillions {
                symbol: "$".to_string(),
            },
            subject: "what this movie would be like".to_string(),
            focus_lines: vec![
                "Focus on what would be great and what would be hilariously terrible."
                    .to_string(),
            ],
            quoted_item: "a punchy title for this movie".to_string(),
        },
    }
}

/// Nigerian wedding, ₦30 million default budget.
pub fn wedding() -> ScenarioDefinition {
    ScenarioDefinition {
        slug: "wedding".to_string(),
        title: "Nigerian Wedding".to_string(),
        default_budget: 30_000_000,
        categories: vec![
            Category::new("venue", "Venue & Rentals", "🏰"),
            Category::new("catering", "Catering & Drinks", "🍽️"),
            Category::new("attire", "Attire & Rings", "👰"),
            Category::new("photography", "Photography & Video", "📸"),
            Category::new("entertainment", "Entertainment", "🎵"),
            Category::new("decorations", "Decorations & Flowers", "💐"),
        ],
        prompt: PromptTemplate {
            persona: "You are a witty Nigerian wedding planner analyzing a wedding budget."
                .to_string(),
            budget_label: "Total budget".to_string(),
            budget_format: BudgetFormat::TenthsMillions {
                symbol: "₦".to_string(),
            },
            subject: "what this Nigerian wedding would be like".to_string(),
            focus_lines: vec![
                "Focus on what would be great and what would be hilariously mismatched."
                    .to_string(),
            ],
            quoted_item: "a punchy tagline for this wedding".to_string(),
        },
    }
}

/// Startup, $1 million default funding.
pub fn startup() -> ScenarioDefinition {
    ScenarioDefinition {
        slug: "startup".to_string(),
        title: "Startup Runway".to_string(),
        default_budget: 1_000_000,
        categories: vec![
            Category::new("development", "Product Development", "💻"),
            Category::new("marketing", "Marketing & Sales", "📢"),
            Category::new("hiring", "Hiring & Team", "👥"),
            Category::new("office", "Office & Equipment", "🏢"),
            Category::new("legal", "Legal & Administration", "⚖️"),
            Category::new("operations", "Operations", "⚙️"),
        ],
        prompt: PromptTemplate {
            persona: "You are a witty venture capitalist analyzing a startup's budget allocation."
                .to_string(),
            budget_label: "Total funding".to_string(),
            budget_format: BudgetFormat::Grouped {
                symbol: "$".to_string(),
            },
            subject: "how this startup would fare".to_string(),
            focus_lines: vec![
                "Include whether it would succeed or fail and why.".to_string(),
            ],
            quoted_item: "a punchy company slogan".to_string(),
        },
    }
}
