//! Active-skill listing tool

use async_trait::async_trait;
use skillhub_core::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};

use crate::handle::RouterHandle;

/// Tool that reports the session's active skills
pub struct ListActiveSkillsTool {
    handle: RouterHandle,
}

impl ListActiveSkillsTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }
}

#[async_trait]
impl Tool for ListActiveSkillsTool {
    fn name(&self) -> &str {
        "list_active_skills"
    }

    fn description(&self) -> &str {
        "List the skills currently active in this session, with the time and a short echo of the last analyzed message."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::optional_string(
                "session_id",
                "Session to inspect; defaults to this connection's session",
            )],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let session_id = self.handle.session_id(call);
        let snapshot = self.handle.router().sessions().snapshot(&session_id).await;

        let payload = serde_json::json!({
            "active_skills": snapshot.active_skills,
            "last_analysis": snapshot.last_analysis.map(|t| t.to_rfc3339()),
            "context_summary": snapshot.context_summary.unwrap_or_default(),
        });
        Ok(ToolResult::success(
            &call.id,
            self.name(),
            payload.to_string(),
        ))
    }
}
