//! Configuration model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default activation bound when the caller does not pass one
pub const DEFAULT_MAX_SKILLS: usize = 1;

/// Hard ceiling on the activation bound
pub const MAX_SKILLS_LIMIT: usize = 5;

/// Skillhub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project-scope skill directories to scan at startup
    pub skill_dirs: Vec<PathBuf>,

    /// Whether to also scan the per-user skill directory
    pub scan_user_skills: bool,

    /// Whether the builtin skill table is registered
    pub register_builtins: bool,

    /// Longest accepted user message, in characters
    pub max_message_length: usize,

    /// Activation bound applied when a request omits `max_skills`
    pub default_max_skills: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skill_dirs: vec![PathBuf::from(".skillhub/skills")],
            scan_user_skills: true,
            register_builtins: true,
            max_message_length: 2000,
            default_max_skills: DEFAULT_MAX_SKILLS,
        }
    }
}

impl Config {
    /// The per-user skill directory, when enabled and resolvable
    pub fn user_skills_dir(&self) -> Option<PathBuf> {
        if !self.scan_user_skills {
            return None;
        }
        dirs::config_dir().map(|dir| dir.join("skillhub").join("skills"))
    }

    /// Apply environment variable overrides
    ///
    /// `SKILLHUB_SKILL_DIRS` (colon separated), `SKILLHUB_MAX_MESSAGE_LENGTH`,
    /// `SKILLHUB_DEFAULT_MAX_SKILLS`, `SKILLHUB_NO_BUILTINS`.
    pub fn apply_env(mut self) -> Self {
        if let Ok(dirs) = std::env::var("SKILLHUB_SKILL_DIRS") {
            self.skill_dirs = dirs.split(':').filter(|s| !s.is_empty()).map(PathBuf::from).collect();
        }
        if let Ok(len) = std::env::var("SKILLHUB_MAX_MESSAGE_LENGTH") {
            if let Ok(len) = len.parse() {
                self.max_message_length = len;
            }
        }
        if let Ok(n) = std::env::var("SKILLHUB_DEFAULT_MAX_SKILLS") {
            if let Ok(n) = n.parse::<usize>() {
                self.default_max_skills = n.clamp(1, MAX_SKILLS_LIMIT);
            }
        }
        if std::env::var("SKILLHUB_NO_BUILTINS").is_ok() {
            self.register_builtins = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.register_builtins);
        assert_eq!(config.default_max_skills, 1);
        assert_eq!(config.max_message_length, 2000);
        assert_eq!(config.skill_dirs, vec![PathBuf::from(".skillhub/skills")]);
    }

    #[test]
    fn test_user_dir_disabled() {
        let config = Config {
            scan_user_skills: false,
            ..Config::default()
        };
        assert_eq!(config.user_skills_dir(), None);
    }
}
