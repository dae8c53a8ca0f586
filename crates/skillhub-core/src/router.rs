//! Routing façade
//!
//! Orchestrates detection, classification, ranking, and session updates
//! for one request. Every path produces a structured [`RouteOutcome`];
//! content-fetch failures ride along on the affected skill's entry instead
//! of failing the call.

use crate::content::{ContentSource, SkillContentStore};
use crate::intent::{classify_intent, standard_intents, Intent, IntentPattern};
use crate::locale::{detect_language, Locale};
use crate::matcher::match_skills;
use crate::registry::SkillRegistry;
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A skill selected for activation, with its match evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivatedSkill {
    /// Skill name
    pub name: String,
    /// Category tag
    pub category: String,
    /// The trigger words that fired
    pub match_reason: Vec<String>,
}

/// Body of an activated skill, or the reason it could not be loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillContent {
    /// Skill name
    pub name: String,
    /// Instruction body, when the fetch succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Fetch failure, when it did not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of one routing call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Ranking produced no candidates; not an error
    NoMatch {
        detected_intent: Intent,
        locale: Locale,
        activated_skills: Vec<ActivatedSkill>,
        hint: String,
    },
    /// Skills were activated for the session
    Activated {
        detected_intent: Intent,
        locale: Locale,
        activated_skills: Vec<ActivatedSkill>,
        skill_contents: Vec<SkillContent>,
        instructions: String,
    },
}

/// The skills controller
///
/// Holds the read-only registry and intent table plus the mutable session
/// store. One router serves every session of a server process.
pub struct SkillRouter {
    registry: Arc<SkillRegistry>,
    intents: Vec<IntentPattern>,
    sessions: SessionStore,
    content: Arc<dyn ContentSource>,
}

impl SkillRouter {
    /// Create a router over a registry with the standard intent table and
    /// the default content store
    pub fn new(registry: SkillRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            intents: standard_intents(),
            sessions: SessionStore::new(),
            content: Arc::new(SkillContentStore::new()),
        }
    }

    /// Substitute the intent table (fixture tables in tests)
    pub fn with_intents(mut self, intents: Vec<IntentPattern>) -> Self {
        self.intents = intents;
        self
    }

    /// Substitute the content source
    pub fn with_content_source(mut self, content: Arc<dyn ContentSource>) -> Self {
        self.content = content;
        self
    }

    /// The skill registry
    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// The session store
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Analyze a message and activate the best-matching skills
    ///
    /// Inputs are pre-validated at the tool boundary: `user_message` within
    /// the configured length, `max_skills` within 1..=5.
    pub async fn analyze_and_route(
        &self,
        session_id: &str,
        user_message: &str,
        max_skills: usize,
    ) -> RouteOutcome {
        let locale = detect_language(user_message);
        let intent = classify_intent(user_message, &self.intents);
        let ranked = match_skills(user_message, intent, &self.registry);

        debug!(
            session = session_id,
            %locale,
            %intent,
            candidates = ranked.len(),
            "analyzed message"
        );

        if ranked.is_empty() {
            return RouteOutcome::NoMatch {
                detected_intent: intent,
                locale,
                activated_skills: Vec::new(),
                hint: no_match_hint(locale),
            };
        }

        let mut activated_skills = Vec::new();
        let mut skill_contents = Vec::new();
        let mut cache_entries = Vec::new();

        for candidate in ranked.into_iter().take(max_skills) {
            // ranked names come from the registry, so the descriptor exists
            let Some(descriptor) = self.registry.get(&candidate.name) else {
                continue;
            };

            let (content, error) = match self.content.load(descriptor).await {
                Ok(body) => (Some(body), None),
                Err(e) => {
                    warn!(skill = %candidate.name, error = %e, "skill body fetch failed");
                    (None, Some(e.to_string()))
                }
            };

            cache_entries.push((candidate.name.clone(), content.clone()));
            skill_contents.push(SkillContent {
                name: candidate.name.clone(),
                content,
                error,
            });
            activated_skills.push(ActivatedSkill {
                name: candidate.name,
                category: candidate.category,
                match_reason: candidate.matched_triggers,
            });
        }

        self.sessions
            .activate(session_id, cache_entries, user_message)
            .await;

        info!(
            session = session_id,
            skills = activated_skills.len(),
            "skills activated"
        );

        RouteOutcome::Activated {
            detected_intent: intent,
            locale,
            activated_skills,
            skill_contents,
            instructions: release_instructions(locale),
        }
    }
}

fn no_match_hint(locale: Locale) -> String {
    match locale {
        Locale::Zh => "没有找到匹配的技能，请用更具体的关键词描述任务。".to_string(),
        Locale::En => {
            "No matching skills were found. Try describing the task with more specific keywords."
                .to_string()
        }
    }
}

fn release_instructions(locale: Locale) -> String {
    match locale {
        Locale::Zh => {
            "技能已激活。任务完成后请调用 deactivate_skill 或 deactivate_all_skills 释放技能。"
                .to_string()
        }
        Locale::En => {
            "Skills activated. Call deactivate_skill or deactivate_all_skills to release them when done."
                .to_string()
        }
    }
}
