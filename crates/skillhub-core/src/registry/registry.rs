//! Skill registry
//!
//! Holds every known skill descriptor in insertion order. Order matters:
//! the ranker uses it as the final tie-break, so registration order is part
//! of the observable contract. Builtins register first, then scanned
//! directories in configuration order.

use crate::config::Config;
use crate::error::{HubError, HubResult};
use crate::intent::Intent;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use super::builtins::builtin_skills;
use super::types::{SkillDescriptor, SkillSource, TriggerWord};

/// Weight assigned to a trigger word declared without one
const DEFAULT_TRIGGER_WEIGHT: i32 = 2;

/// Insertion-ordered catalog of skill descriptors
#[derive(Debug, Default)]
pub struct SkillRegistry {
    entries: Vec<SkillDescriptor>,
    index: HashMap<String, usize>,
}

impl SkillRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configuration: builtins first, then every
    /// configured skill directory, then the user directory
    pub async fn load(config: &Config) -> HubResult<Self> {
        let mut registry = Self::new();

        if config.register_builtins {
            registry.register_builtins();
        }

        for dir in &config.skill_dirs {
            let count = registry.discover_from_dir(dir, false).await?;
            debug!(dir = %dir.display(), count, "scanned project skill directory");
        }

        if let Some(user_dir) = config.user_skills_dir() {
            let count = registry.discover_from_dir(&user_dir, true).await?;
            debug!(dir = %user_dir.display(), count, "scanned user skill directory");
        }

        Ok(registry)
    }

    /// Register a descriptor
    ///
    /// A descriptor with a known name replaces the existing entry in place,
    /// keeping its original position so ranking ties stay stable.
    pub fn register(&mut self, skill: SkillDescriptor) {
        match self.index.get(&skill.name) {
            Some(&pos) => self.entries[pos] = skill,
            None => {
                self.index.insert(skill.name.clone(), self.entries.len());
                self.entries.push(skill);
            }
        }
    }

    /// Register the builtin skill table
    pub fn register_builtins(&mut self) {
        for skill in builtin_skills() {
            self.register(skill);
        }
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &str) -> Option<&SkillDescriptor> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Check if a skill exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate descriptors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SkillDescriptor> {
        self.entries.iter()
    }

    /// Number of registered skills
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of builtin skills
    pub fn builtin_count(&self) -> usize {
        self.entries.iter().filter(|s| s.is_builtin()).count()
    }

    /// Descriptors grouped by category, categories in sorted order
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&SkillDescriptor>> {
        let mut grouped: BTreeMap<&str, Vec<&SkillDescriptor>> = BTreeMap::new();
        for skill in &self.entries {
            grouped.entry(skill.category.as_str()).or_default().push(skill);
        }
        grouped
    }

    /// Case-insensitive keyword search over names, descriptions, categories,
    /// and trigger words, in insertion order
    pub fn search(&self, keyword: &str) -> Vec<&SkillDescriptor> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|skill| {
                skill.name.to_lowercase().contains(&needle)
                    || skill.description.to_lowercase().contains(&needle)
                    || skill.category.to_lowercase().contains(&needle)
                    || skill
                        .triggers
                        .iter()
                        .any(|t| t.word.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Discover skills from a directory
    ///
    /// Missing directories are fine (zero skills); unreadable entries and
    /// malformed frontmatter are registry errors. Scanned skills may not
    /// shadow builtins.
    pub async fn discover_from_dir(&mut self, dir: &Path, is_user: bool) -> HubResult<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut count = 0;
        let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
            HubError::registry(format!("Failed to read skill directory: {}", e))
                .with_context(dir.display().to_string())
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            HubError::registry(format!("Failed to read directory entry: {}", e))
        })? {
            let path = entry.path();
            if !path.extension().map_or(false, |ext| ext == "md") {
                continue;
            }

            match self.load_skill_from_file(&path, is_user).await? {
                Some(skill) => {
                    let shadows_builtin = self
                        .get(&skill.name)
                        .is_some_and(|existing| existing.is_builtin());
                    if shadows_builtin {
                        warn!(name = %skill.name, path = %path.display(),
                              "scanned skill shadows a builtin, keeping the builtin");
                        continue;
                    }
                    self.register(skill);
                    count += 1;
                }
                None => {
                    warn!(path = %path.display(), "skill file has no frontmatter, skipping");
                }
            }
        }

        Ok(count)
    }

    /// Load one descriptor from a markdown file with YAML frontmatter
    async fn load_skill_from_file(
        &self,
        path: &Path,
        is_user: bool,
    ) -> HubResult<Option<SkillDescriptor>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            HubError::registry(format!("Failed to read skill file: {}", e))
                .with_context(path.display().to_string())
        })?;

        let Some((frontmatter, _body)) = split_frontmatter(&content) else {
            return Ok(None);
        };

        let meta: SkillFrontmatter = serde_yaml::from_str(frontmatter).map_err(|e| {
            HubError::registry(format!("Malformed skill frontmatter: {}", e))
                .with_context(path.display().to_string())
        })?;

        let name = match meta.name {
            Some(name) => name,
            None => path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    HubError::registry("Skill file has no usable name")
                        .with_context(path.display().to_string())
                })?,
        };

        let source = if is_user {
            SkillSource::User(path.to_path_buf())
        } else {
            SkillSource::Project(path.to_path_buf())
        };

        let mut skill = SkillDescriptor::new(name, meta.description)
            .with_priority(meta.priority)
            .with_source(source);

        if let Some(category) = meta.category {
            skill = skill.with_category(category);
        }
        for trigger in meta.triggers {
            skill.triggers.extend(trigger.into_trigger_words());
        }
        skill.excludes = meta.excludes;
        skill.required_intents = meta.required_intents;
        skill.excluded_intents = meta.excluded_intents;

        Ok(Some(skill))
    }
}

/// Split a markdown document into its YAML frontmatter and body
///
/// Returns `None` when the document does not open with a `---` fence.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let frontmatter = &rest[..end];
    let body = rest[end + 4..].trim_start_matches('-').trim_start();
    Some((frontmatter, body))
}

/// Frontmatter schema for scanned skill files
#[derive(Debug, serde::Deserialize)]
struct SkillFrontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    priority: i32,
    #[serde(default)]
    triggers: Vec<TriggerSpec>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    required_intents: Vec<Intent>,
    #[serde(default)]
    excluded_intents: Vec<Intent>,
}

/// Trigger declarations accept a bare word, a `word: weight` map entry, or
/// an explicit `{word, weight}` record
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum TriggerSpec {
    Plain(String),
    Entry {
        word: String,
        #[serde(default = "default_trigger_weight")]
        weight: i32,
    },
    Weighted(HashMap<String, i32>),
}

fn default_trigger_weight() -> i32 {
    DEFAULT_TRIGGER_WEIGHT
}

impl TriggerSpec {
    fn into_trigger_words(self) -> Vec<TriggerWord> {
        match self {
            Self::Plain(word) => vec![TriggerWord::new(word, DEFAULT_TRIGGER_WEIGHT)],
            Self::Entry { word, weight } => vec![TriggerWord::new(word, weight)],
            Self::Weighted(map) => {
                let mut words: Vec<(String, i32)> = map.into_iter().collect();
                // single-entry maps in practice, but keep multi-entry
                // deterministic
                words.sort();
                words
                    .into_iter()
                    .map(|(word, weight)| TriggerWord::new(word, weight))
                    .collect()
            }
        }
    }
}
