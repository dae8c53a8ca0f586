//! One-shot analysis command

use anyhow::bail;
use skillhub_core::config::MAX_SKILLS_LIMIT;
use skillhub_core::Config;

use super::build_router;

/// Route one message and print the outcome as pretty JSON
pub async fn run(
    config: Config,
    message: &str,
    max_skills: usize,
    session: &str,
) -> anyhow::Result<()> {
    if message.trim().is_empty() {
        bail!("message cannot be empty");
    }
    let length = message.chars().count();
    if length > config.max_message_length {
        bail!(
            "message is {} characters, limit is {}",
            length,
            config.max_message_length
        );
    }
    if !(1..=MAX_SKILLS_LIMIT).contains(&max_skills) {
        bail!("--max-skills must be between 1 and {}", MAX_SKILLS_LIMIT);
    }

    let router = build_router(&config).await?;
    let outcome = router.analyze_and_route(session, message, max_skills).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
