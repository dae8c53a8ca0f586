//! CLI command implementations

pub mod analyze;
pub mod serve;
pub mod skills;

use crate::args::Cli;
use anyhow::Context;
use skillhub_core::{config, Config, SkillRegistry, SkillRouter};

/// Load configuration: file, environment, then CLI overrides
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = config::load_from_file(&cli.config_file)
        .with_context(|| format!("loading {}", cli.config_file.display()))?
        .apply_env();
    config.skill_dirs.extend(cli.skill_dirs.iter().cloned());
    Ok(config)
}

/// Build the routing engine from configuration
pub async fn build_router(config: &Config) -> anyhow::Result<SkillRouter> {
    let registry = SkillRegistry::load(config)
        .await
        .context("loading skill registry")?;
    tracing::info!(skills = registry.len(), "skill registry loaded");
    Ok(SkillRouter::new(registry))
}
