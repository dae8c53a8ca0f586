//! Skill registry
//!
//! The static catalog of skill descriptors: builtin table plus the startup
//! directory scan. Read-only after loading; shared across all sessions.

mod builtins;
mod registry;
mod types;

pub use builtins::builtin_skills;
pub use registry::{split_frontmatter, SkillRegistry};
pub use types::{SkillDescriptor, SkillSource, TriggerWord};
