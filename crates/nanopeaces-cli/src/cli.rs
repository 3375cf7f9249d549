//! CLI argument definitions for nano-peaces.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nanopeaces_adapters::AgentType;

/// nano-peaces -- the missing UI skills pack for AI agents.
#[derive(Parser)]
#[command(
    name = "nano-peaces",
    version,
    about = "The missing UI skills pack for AI agents",
    long_about = "Detects a project's UI stack and installs matching skill packs \
                  in the layout each AI coding agent expects."
)]
pub struct Cli {
    /// Project root to operate on.
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Skill content root (overrides NANO_PEACES_SKILLS_DIR and settings).
    #[arg(long, global = true)]
    pub skills_dir: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the project stack and install recommended skills.
    Init {
        /// Target agent (antigravity, claude-code, cursor, generic).
        #[arg(long, short, value_parser = parse_agent)]
        agent: Option<AgentType>,

        /// Skill to install instead of the recommendations. Repeatable.
        #[arg(long = "skill", short = 's')]
        skills: Vec<String>,

        /// Reinitialize a project that already has a saved config.
        #[arg(long, short)]
        yes: bool,
    },

    /// Add a skill to the project.
    Add {
        /// Skill id from the catalog.
        skill_id: Option<String>,

        /// Add every recommended skill, or the whole catalog when nothing
        /// is recommended.
        #[arg(long, conflicts_with = "skill_id")]
        all: bool,

        /// Target agent. Defaults to the agent in the saved config.
        #[arg(long, short, value_parser = parse_agent)]
        agent: Option<AgentType>,
    },

    /// List catalog skills and which are installed.
    List,

    /// Reinstall every recorded skill from the current content root.
    Update,

    /// Show the catalog entry and documents of one skill.
    Info {
        /// Skill id from the catalog.
        skill_id: String,
    },

    /// Print the detected project fingerprint.
    Detect {
        /// Print the fingerprint as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn parse_agent(value: &str) -> Result<AgentType, nanopeaces_adapters::AdapterError> {
    value.parse()
}
