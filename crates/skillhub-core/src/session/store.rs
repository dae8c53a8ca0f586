//! Session store
//!
//! Maps session identifiers to their mutable state. The store's write lock
//! is the serialization point the session contract requires: operations on
//! the same session never interleave, and operations on different sessions
//! touch disjoint records.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::state::{ClearedSkills, DeactivateOutcome, SessionSnapshot, SessionState};

/// Store of per-session activation state
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate skills for a session, caching fetched bodies
    ///
    /// Creates the session on first touch. Entries with `None` bodies are
    /// activated without a cache entry (their content fetch failed).
    pub async fn activate(
        &self,
        session_id: &str,
        entries: Vec<(String, Option<String>)>,
        context: &str,
    ) {
        let mut sessions = self.sessions.write().await;
        let state = sessions.entry(session_id.to_string()).or_default();
        for (name, body) in entries {
            state.activate(&name, body);
        }
        state.touch(context, Utc::now());
        debug!(session = session_id, active = state.active_skills().len(), "skills activated");
    }

    /// Deactivate one skill for a session
    pub async fn deactivate_one(&self, session_id: &str, name: &str) -> DeactivateOutcome {
        let mut sessions = self.sessions.write().await;
        let state = sessions.entry(session_id.to_string()).or_default();
        let removed = state.deactivate(name);
        let remaining = state.active_skills().to_vec();
        if removed {
            debug!(session = session_id, skill = name, "skill deactivated");
            DeactivateOutcome::Deactivated { remaining }
        } else {
            DeactivateOutcome::NotActive { remaining }
        }
    }

    /// Deactivate every skill for a session
    ///
    /// Idempotent: an empty or unknown session reports zero cleared.
    pub async fn deactivate_all(&self, session_id: &str) -> ClearedSkills {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session_id) {
            Some(state) => {
                let cleared = state.clear();
                debug!(session = session_id, count = cleared.count, "session cleared");
                cleared
            }
            None => ClearedSkills {
                count: 0,
                names: Vec::new(),
            },
        }
    }

    /// Read-only snapshot of a session
    ///
    /// Unknown sessions read as idle; looking is not creating.
    pub async fn snapshot(&self, session_id: &str) -> SessionSnapshot {
        let sessions = self.sessions.read().await;
        match sessions.get(session_id) {
            Some(state) => state.snapshot(),
            None => SessionSnapshot {
                active_skills: Vec::new(),
                last_analysis: None,
                context_summary: None,
            },
        }
    }

    /// Cached body for an active skill
    pub async fn cached_content(&self, session_id: &str, name: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .and_then(|state| state.cached_content(name).map(str::to_string))
    }

    /// Drop a session record entirely (connection teardown)
    pub async fn remove(&self, session_id: &str) {
        self.sessions.write().await.remove(session_id);
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether any session exists
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
