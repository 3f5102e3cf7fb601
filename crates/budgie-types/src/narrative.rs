//! Narrative prompt configuration types.
//!
//! Each scenario carries a [`PromptTemplate`]: the fixed persona, labels,
//! currency formatting convention, and tone instructions used to turn an
//! allocation into a generation prompt. The templates are data; the prompt
//! assembly lives in budgie-core.

use serde::{Deserialize, Serialize};

/// How a total budget is rendered inside a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum BudgetFormat {
    /// "$100 million" -- millions, fractional part shown only when present.
    WholeMillions { symbol: String },
    /// "₦30.0 million" -- millions with exactly one decimal place.
    TenthsMillions { symbol: String },
    /// "$1,000,000" -- full amount with thousands separators.
    Grouped { symbol: String },
}

impl BudgetFormat {
    /// Render a total budget according to this convention.
    pub fn format(&self, total_budget: u64) -> String {
        match self {
            BudgetFormat::WholeMillions { symbol } => {
                let millions = total_budget as f64 / 1_000_000.0;
                if millions.fract() == 0.0 {
                    format!("{symbol}{} million", millions as u64)
                } else {
                    format!("{symbol}{millions} million")
                }
            }
            BudgetFormat::TenthsMillions { symbol } => {
                let millions = total_budget as f64 / 1_000_000.0;
                format!("{symbol}{millions:.1} million")
            }
            BudgetFormat::Grouped { symbol } => {
                format!("{symbol}{}", group_thousands(total_budget))
            }
        }
    }
}

/// Insert comma separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fixed prompt configuration for one scenario.
///
/// The assembled prompt reads:
///
/// ```text
/// {persona}
/// {budget_label}: {formatted budget}.
///
/// Budget breakdown:
/// - {category name}: {pct}%
/// ...
///
/// Give a humorous 2-paragraph description of {subject} based on this budget allocation.
/// {focus_lines...}
/// Include {quoted_item} in quotation marks.
/// Keep your response under 300 characters.
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Role-setting opener (e.g., "You are a witty Hollywood insider...").
    pub persona: String,
    /// Label for the budget line (e.g., "Total budget", "Total funding").
    pub budget_label: String,
    /// Currency rendering convention for the budget line.
    pub budget_format: BudgetFormat,
    /// Subject clause (e.g., "what this movie would be like").
    pub subject: String,
    /// Scenario-specific tone instructions, one line each.
    pub focus_lines: Vec<String>,
    /// The quoted element to demand (e.g., "a punchy title for this movie").
    pub quoted_item: String,
}
