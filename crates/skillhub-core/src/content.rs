//! Skill body loading
//!
//! The router fetches a skill's instruction body at activation time through
//! the [`ContentSource`] seam, so tests can substitute fixed content and a
//! missing file is a typed error rather than a crash.

use crate::error::{HubError, HubResult};
use crate::registry::{split_frontmatter, SkillDescriptor};
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of skill instruction bodies
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the body for a descriptor
    ///
    /// Failure is recoverable: the router surfaces it on the skill's entry
    /// and continues with the other activations.
    async fn load(&self, skill: &SkillDescriptor) -> HubResult<String>;
}

/// Default source: inline bodies for builtins, file reads for scanned skills
///
/// Scanned bodies are the markdown after the frontmatter fence.
#[derive(Debug, Default)]
pub struct SkillContentStore;

impl SkillContentStore {
    /// Create the default content store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for SkillContentStore {
    async fn load(&self, skill: &SkillDescriptor) -> HubResult<String> {
        if let Some(body) = &skill.body {
            return Ok(body.clone());
        }

        let path = skill.source.path().ok_or_else(|| {
            HubError::not_found_resource(
                format!("Skill '{}' has no content", skill.name),
                "skill_content",
            )
        })?;

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            HubError::not_found_resource(
                format!("Skill '{}' body unreadable: {}", skill.name, e),
                "skill_content",
            )
            .with_context(path.display().to_string())
        })?;

        let body = match split_frontmatter(&content) {
            Some((_, body)) => body.to_string(),
            None => content,
        };
        Ok(body)
    }
}

/// In-memory content source for tests and embedders
#[derive(Debug, Default)]
pub struct MemoryContentSource {
    bodies: HashMap<String, String>,
}

impl MemoryContentSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body keyed by skill name
    pub fn with_body(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(name.into(), body.into());
        self
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn load(&self, skill: &SkillDescriptor) -> HubResult<String> {
        self.bodies.get(&skill.name).cloned().ok_or_else(|| {
            HubError::not_found_resource(
                format!("Skill '{}' has no content", skill.name),
                "skill_content",
            )
        })
    }
}
