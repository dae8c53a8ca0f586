//! Skillhub CLI
//!
//! Two jobs: run the MCP stdio server (`skillhub serve`) and inspect the
//! routing engine locally (`skillhub analyze`, `skillhub skills`). All
//! logging goes to stderr because stdout belongs to the protocol when
//! serving.

mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use args::{Cli, Commands, SkillsAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(&cli)?;

    match cli.command {
        Commands::Serve => commands::serve::run(config).await,
        Commands::Analyze {
            ref message,
            max_skills,
            ref session,
        } => commands::analyze::run(config, message, max_skills, session).await,
        Commands::Skills { ref action } => commands::skills::run(config, action).await,
    }
}
