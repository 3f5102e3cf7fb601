//! CLI argument definitions and command handlers.

pub mod narrate;
pub mod scenario;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// budgie -- a playful budget allocation sandbox.
#[derive(Debug, Parser)]
#[command(name = "budgie", version, about = "Distribute a budget across categories and let an LLM roast the result")]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of styled output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Bind host (overrides config.toml)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the built-in scenarios
    Scenarios,

    /// Show a scenario's current allocation
    Show {
        /// Scenario slug (movie, wedding, startup)
        scenario: String,
    },

    /// Apply slider edits and generate a narrative
    Narrate {
        /// Scenario slug (movie, wedding, startup)
        scenario: String,

        /// Set a category's percentage, e.g. --set actors=50
        #[arg(long = "set", value_name = "CATEGORY=PCT")]
        set: Vec<String>,

        /// Override the total budget
        #[arg(long)]
        budget: Option<u64>,

        /// Use canned responses instead of the live provider
        #[arg(long)]
        offline: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
