//! Session state record and operation outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Longest context echo in a snapshot, in characters
const CONTEXT_SUMMARY_CHARS: usize = 100;

/// Mutable state for one session
///
/// Invariants: `active_skills` holds no duplicates, and every
/// `content_cache` key is an active skill. Deactivation removes the
/// active entry and the cached body together.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Currently active skill names, in activation order
    active_skills: Vec<String>,
    /// Cached skill bodies for active skills
    content_cache: HashMap<String, String>,
    /// Time of the most recent successful routing call
    last_analysis: Option<DateTime<Utc>>,
    /// Raw user message of the most recent routing call
    last_context: Option<String>,
}

impl SessionState {
    /// Activate a skill, caching its body when one was fetched
    ///
    /// Re-activating an active skill is idempotent: no duplicate entry,
    /// the cached body is refreshed.
    pub fn activate(&mut self, name: &str, body: Option<String>) {
        if !self.active_skills.iter().any(|n| n == name) {
            self.active_skills.push(name.to_string());
        }
        match body {
            Some(body) => {
                self.content_cache.insert(name.to_string(), body);
            }
            None => {
                self.content_cache.remove(name);
            }
        }
    }

    /// Record the message that drove the latest activation
    pub fn touch(&mut self, context: &str, now: DateTime<Utc>) {
        self.last_analysis = Some(now);
        self.last_context = Some(context.to_string());
    }

    /// Deactivate one skill; reports whether it was active
    pub fn deactivate(&mut self, name: &str) -> bool {
        let was_active = self.active_skills.iter().position(|n| n == name);
        match was_active {
            Some(pos) => {
                self.active_skills.remove(pos);
                self.content_cache.remove(name);
                true
            }
            None => false,
        }
    }

    /// Deactivate everything, reporting what was cleared
    pub fn clear(&mut self) -> ClearedSkills {
        let names = std::mem::take(&mut self.active_skills);
        self.content_cache.clear();
        self.last_analysis = None;
        self.last_context = None;
        ClearedSkills {
            count: names.len(),
            names,
        }
    }

    /// Active skill names, in activation order
    pub fn active_skills(&self) -> &[String] {
        &self.active_skills
    }

    /// Cached body for a skill, if present
    pub fn cached_content(&self, name: &str) -> Option<&str> {
        self.content_cache.get(name).map(String::as_str)
    }

    /// Read-only snapshot for the listing surface
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active_skills: self.active_skills.clone(),
            last_analysis: self.last_analysis,
            context_summary: self.last_context.as_deref().map(summarize_context),
        }
    }

    #[cfg(test)]
    pub(crate) fn cache_len(&self) -> usize {
        self.content_cache.len()
    }
}

/// Truncate a context echo to a displayable length
fn summarize_context(context: &str) -> String {
    let mut chars = context.chars();
    let summary: String = chars.by_ref().take(CONTEXT_SUMMARY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", summary)
    } else {
        summary
    }
}

/// Read-only view of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Active skill names
    pub active_skills: Vec<String>,
    /// Time of the last routing call, if any
    pub last_analysis: Option<DateTime<Utc>>,
    /// Truncated echo of the last routed message
    pub context_summary: Option<String>,
}

/// Outcome of deactivating one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeactivateOutcome {
    /// The skill was active and has been removed
    Deactivated { remaining: Vec<String> },
    /// The skill was not active; state is unchanged
    NotActive { remaining: Vec<String> },
}

/// Report from a bulk deactivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedSkills {
    /// How many skills were cleared
    pub count: usize,
    /// The cleared names, in their activation order
    pub names: Vec<String>,
}
