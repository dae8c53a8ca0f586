//! Skill descriptor definitions
//!
//! A descriptor is the static, read-only record the matcher scores against.
//! Descriptors are built once at startup (builtins plus the directory scan)
//! and shared across every session.

use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A weighted trigger keyword
///
/// The word is matched case-insensitively as a substring of the user
/// message; each hit adds `weight` to the skill's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerWord {
    /// Keyword or phrase, stored as written in the descriptor
    pub word: String,
    /// Additive score contribution per hit
    pub weight: i32,
}

impl TriggerWord {
    /// Create a trigger word
    pub fn new(word: impl Into<String>, weight: i32) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

/// Where a descriptor came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillSource {
    /// Compiled into the binary
    Builtin,
    /// Project skill directory (.skillhub/skills/)
    Project(PathBuf),
    /// User skill directory (~/.config/skillhub/skills/)
    User(PathBuf),
}

impl SkillSource {
    /// Path of the backing file, if the skill was scanned from disk
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Builtin => None,
            Self::Project(path) | Self::User(path) => Some(path),
        }
    }
}

impl Default for SkillSource {
    fn default() -> Self {
        Self::Builtin
    }
}

/// A skill as seen by the matcher and the index surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Unique name, stable across sessions
    pub name: String,

    /// One-line description for the index surface
    pub description: String,

    /// Grouping tag for reporting
    pub category: String,

    /// Tie-break weight: on equal match scores, higher priority ranks first
    pub priority: i32,

    /// Weighted trigger keywords, in descriptor order
    pub triggers: Vec<TriggerWord>,

    /// Words whose presence disqualifies the skill outright
    pub excludes: Vec<String>,

    /// If non-empty, the skill is eligible only under these intents
    pub required_intents: Vec<Intent>,

    /// Intents under which the skill is never eligible
    pub excluded_intents: Vec<Intent>,

    /// Origin of the descriptor
    pub source: SkillSource,

    /// Inline body for builtin skills; scanned skills are read from disk
    pub body: Option<String>,
}

impl SkillDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: "general".to_string(),
            priority: 0,
            triggers: Vec::new(),
            excludes: Vec::new(),
            required_intents: Vec::new(),
            excluded_intents: Vec::new(),
            source: SkillSource::Builtin,
            body: None,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a weighted trigger
    pub fn with_trigger(mut self, word: impl Into<String>, weight: i32) -> Self {
        self.triggers.push(TriggerWord::new(word, weight));
        self
    }

    /// Add an exclusion word
    pub fn with_exclude(mut self, word: impl Into<String>) -> Self {
        self.excludes.push(word.into());
        self
    }

    /// Restrict the skill to an intent
    pub fn require_intent(mut self, intent: Intent) -> Self {
        self.required_intents.push(intent);
        self
    }

    /// Bar the skill under an intent
    pub fn exclude_intent(mut self, intent: Intent) -> Self {
        self.excluded_intents.push(intent);
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: SkillSource) -> Self {
        self.source = source;
        self
    }

    /// Set an inline body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Whether this descriptor is a builtin
    pub fn is_builtin(&self) -> bool {
        self.source == SkillSource::Builtin
    }
}
