//! File-based configuration loading

use crate::config::Config;
use crate::error::{HubError, HubResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports TOML, YAML, and JSON based on file extension. A missing file
/// yields the defaults.
pub fn load_from_file(path: &Path) -> HubResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        HubError::config_with_context(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            HubError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                path.display().to_string(),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            HubError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                path.display().to_string(),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            HubError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                path.display().to_string(),
            )
        })?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let config = load_from_file(Path::new("/nonexistent/skillhub.toml")).unwrap();
        assert!(config.register_builtins);
    }

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skillhub.toml");
        fs::write(
            &path,
            "max_message_length = 500\nskill_dirs = [\"skills\"]\nregister_builtins = false\n",
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.max_message_length, 500);
        assert!(!config.register_builtins);
        assert_eq!(config.skill_dirs, vec![std::path::PathBuf::from("skills")]);
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skillhub.json");
        fs::write(&path, r#"{"default_max_skills": 3}"#).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.default_max_skills, 3);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skillhub.toml");
        fs::write(&path, "max_message_length = [not a number").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, HubError::Config { .. }));
    }
}
