//! Skill search tool

use async_trait::async_trait;
use skillhub_core::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};

use crate::handle::RouterHandle;

/// Tool that searches the skill catalog by keyword
pub struct SearchSkillsTool {
    handle: RouterHandle,
}

impl SearchSkillsTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl Tool for SearchSkillsTool {
    fn name(&self) -> &str {
        "search_skills"
    }

    fn description(&self) -> &str {
        "Search registered skills by keyword across names, descriptions, categories, and trigger words."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::string(
                "keyword",
                "Keyword to search for (case-insensitive)",
            )],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let keyword = call
            .get_string("keyword")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'keyword'".to_string()))?;
        if keyword.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "'keyword' cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let keyword = call
            .get_string("keyword")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'keyword'".to_string()))?;

        let hits = self.handle.router().registry().search(&keyword);
        let skills: Vec<serde_json::Value> = hits
            .iter()
            .map(|skill| {
                serde_json::json!({
                    "name": skill.name,
                    "category": skill.category,
                    "description": skill.description,
                })
            })
            .collect();

        let payload = serde_json::json!({
            "matches": skills.len(),
            "skills": skills,
        });
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            payload.to_string(),
        ))
    }
}
