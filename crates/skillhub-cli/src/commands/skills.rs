//! Skill catalog inspection commands

use console::style;
use skillhub_core::Config;

use crate::args::SkillsAction;

use super::build_router;

/// Run a catalog inspection action
pub async fn run(config: Config, action: &SkillsAction) -> anyhow::Result<()> {
    let router = build_router(&config).await?;
    let registry = router.registry();

    match action {
        SkillsAction::List => {
            println!(
                "{} skills in {} categories\n",
                registry.len(),
                registry.by_category().len()
            );
            for (category, skills) in registry.by_category() {
                println!("{} ({})", style(category).bold(), skills.len());
                for skill in skills {
                    let gates = if skill.required_intents.is_empty() {
                        String::new()
                    } else {
                        let intents: Vec<_> =
                            skill.required_intents.iter().map(|i| i.as_str()).collect();
                        format!(" [{}]", intents.join(", "))
                    };
                    println!(
                        "  {}{} - {}",
                        style(&skill.name).green(),
                        style(gates).dim(),
                        skill.description
                    );
                }
                println!();
            }
        }
        SkillsAction::Search { keyword } => {
            let hits = registry.search(keyword);
            if hits.is_empty() {
                println!("no skills match '{}'", keyword);
                return Ok(());
            }
            println!("{} match(es) for '{}'\n", hits.len(), keyword);
            for skill in hits {
                println!(
                    "  {} ({}) - {}",
                    style(&skill.name).green(),
                    skill.category,
                    skill.description
                );
            }
        }
    }
    Ok(())
}
