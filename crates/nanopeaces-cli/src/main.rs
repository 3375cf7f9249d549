//! CLI entry point for nano-peaces.
//!
//! This binary provides the `nano-peaces` command: fingerprint a project,
//! then install UI skill packs in the layout of the chosen AI agent.

mod cli;
mod commands;
mod helpers;
mod plan;
mod project;

use anyhow::Result;
use clap::Parser;
use nanopeaces_skills::SkillStore;

use cli::{Cli, Commands};
use commands::Workspace;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = helpers::load_settings(&cli.project);
    helpers::init_tracing(
        &helpers::resolve_log_level(cli.log_level.as_deref(), &settings),
        settings.json_logs(),
    );

    let skills_dir = helpers::resolve_skills_dir(
        cli.skills_dir.as_deref(),
        helpers::skills_dir_from_env(),
        &settings,
        &cli.project,
    );
    tracing::debug!(
        project = %cli.project.display(),
        skills_dir = %skills_dir.display(),
        "workspace resolved"
    );

    let ws = Workspace {
        project_root: cli.project,
        store: SkillStore::new(skills_dir),
        settings,
    };

    match cli.command {
        Commands::Init { agent, skills, yes } => commands::cmd_init(&ws, agent, skills, yes).await,
        Commands::Add {
            skill_id,
            all,
            agent,
        } => commands::cmd_add(&ws, skill_id, all, agent).await,
        Commands::List => commands::cmd_list(&ws).await,
        Commands::Update => commands::cmd_update(&ws).await,
        Commands::Info { skill_id } => commands::cmd_info(&ws, &skill_id),
        Commands::Detect { json } => commands::cmd_detect(&ws, json),
    }
}
