//! Skillhub Core Library
//!
//! Routes free-text user requests to predefined skill bundles: a language
//! detector and intent classifier feed a weighted trigger matcher, and a
//! per-session store tracks which skills are active. The MCP module serves
//! the whole thing over stdio.

pub mod config;
pub mod content;
pub mod error;
pub mod intent;
pub mod locale;
pub mod matcher;
pub mod mcp;
pub mod registry;
pub mod router;
pub mod session;
pub mod tools;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentSource, MemoryContentSource, SkillContentStore};
pub use error::{HubError, HubResult};
pub use intent::{classify_intent, standard_intents, Intent, IntentPattern};
pub use locale::{detect_language, Locale};
pub use matcher::{match_skills, SkillMatch};
pub use mcp::McpServer;
pub use registry::{SkillDescriptor, SkillRegistry, SkillSource, TriggerWord};
pub use router::{ActivatedSkill, RouteOutcome, SkillContent, SkillRouter};
pub use session::{ClearedSkills, DeactivateOutcome, SessionSnapshot, SessionStore};
pub use tools::{
    Tool, ToolCall, ToolError, ToolParameter, ToolRegistry, ToolRegistryBuilder, ToolResult,
    ToolSchema,
};
