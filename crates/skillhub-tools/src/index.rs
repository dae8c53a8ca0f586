//! Skill index tool

use async_trait::async_trait;
use skillhub_core::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};

use crate::handle::RouterHandle;

/// Tool that exposes the full skill catalog grouped by category
pub struct GetSkillIndexTool {
    handle: RouterHandle,
}

impl GetSkillIndexTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl Tool for GetSkillIndexTool {
    fn name(&self) -> &str {
        "get_skill_index"
    }

    fn description(&self) -> &str {
        "List every registered skill grouped by category, with descriptions and trigger words."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), vec![])
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let registry = self.handle.router().registry();

        let by_category: Vec<serde_json::Value> = registry
            .by_category()
            .into_iter()
            .map(|(category, skills)| {
                serde_json::json!({
                    "category": category,
                    "count": skills.len(),
                    "skills": skills
                        .iter()
                        .map(|skill| serde_json::json!({
                            "name": skill.name,
                            "description": skill.description,
                            "triggers": skill.triggers.iter().map(|t| t.word.clone()).collect::<Vec<_>>(),
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let payload = serde_json::json!({
            "total": registry.len(),
            "by_category": by_category,
        });
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            payload.to_string(),
        ))
    }
}
