//! Skill deactivation tools

use async_trait::async_trait;
use skillhub_core::{
    DeactivateOutcome, Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema,
};
use tracing::debug;

use crate::handle::RouterHandle;

/// Tool that releases one skill from the session
pub struct DeactivateSkillTool {
    handle: RouterHandle,
}

impl DeactivateSkillTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl Tool for DeactivateSkillTool {
    fn name(&self) -> &str {
        "deactivate_skill"
    }

    fn description(&self) -> &str {
        "Deactivate one skill in this session and release its cached content."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("skill_name", "Name of the skill to deactivate"),
                ToolParameter::optional_string(
                    "session_id",
                    "Session to act on; defaults to this connection's session",
                ),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let name = call
            .get_string("skill_name")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'skill_name'".to_string()))?;
        if name.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "'skill_name' cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let name = call
            .get_string("skill_name")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'skill_name'".to_string()))?;
        let session_id = self.handle.session_id(call);

        let outcome = self
            .handle
            .router()
            .sessions()
            .deactivate_one(&session_id, &name)
            .await;
        debug!(session = %session_id, skill = %name, ?outcome, "deactivation requested");

        let payload = match outcome {
            DeactivateOutcome::Deactivated { remaining } => serde_json::json!({
                "status": "deactivated",
                "remaining_active": remaining,
            }),
            DeactivateOutcome::NotActive { remaining } => serde_json::json!({
                "status": "not_found",
                "remaining_active": remaining,
            }),
        };
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            payload.to_string(),
        ))
    }
}

/// Tool that releases every skill in the session
pub struct DeactivateAllSkillsTool {
    handle: RouterHandle,
}

impl DeactivateAllSkillsTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl Tool for DeactivateAllSkillsTool {
    fn name(&self) -> &str {
        "deactivate_all_skills"
    }

    fn description(&self) -> &str {
        "Deactivate every active skill in this session."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::optional_string(
                "session_id",
                "Session to act on; defaults to this connection's session",
            )],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let session_id = self.handle.session_id(call);
        let cleared = self
            .handle
            .router()
            .sessions()
            .deactivate_all(&session_id)
            .await;

        let payload = serde_json::json!({
            "status": "all_deactivated",
            "count": cleared.count,
            "deactivated_skills": cleared.names,
        });
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            payload.to_string(),
        ))
    }
}
