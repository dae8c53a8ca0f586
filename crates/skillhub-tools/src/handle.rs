//! Shared router handle for tools

use skillhub_core::{Config, SkillRouter, ToolCall};
use std::sync::Arc;
use uuid::Uuid;

/// Cloneable handle each tool holds
///
/// Carries the router, the validation limits from configuration, and a
/// generated default session identifier. Callers that do not pass
/// `session_id` all share the connection's default session, which is what
/// a bare MCP client expects.
#[derive(Clone)]
pub struct RouterHandle {
    router: Arc<SkillRouter>,
    max_message_length: usize,
    default_max_skills: usize,
    default_session: String,
}

impl RouterHandle {
    /// Create a handle over a router with limits from configuration
    pub fn new(router: Arc<SkillRouter>, config: &Config) -> Self {
        Self {
            router,
            max_message_length: config.max_message_length,
            default_max_skills: config.default_max_skills,
            default_session: Uuid::new_v4().to_string(),
        }
    }

    /// The routing engine
    pub fn router(&self) -> &SkillRouter {
        &self.router
    }

    /// Longest accepted user message, in characters
    pub fn max_message_length(&self) -> usize {
        self.max_message_length
    }

    /// Activation bound applied when the caller omits `max_skills`
    pub fn default_max_skills(&self) -> usize {
        self.default_max_skills
    }

    /// Resolve the session for a call: explicit argument or the default
    pub fn session_id(&self, call: &ToolCall) -> String {
        call.get_string("session_id")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_session.clone())
    }
}
