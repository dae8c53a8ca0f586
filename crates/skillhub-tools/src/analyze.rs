//! Message analysis and skill activation tool

use async_trait::async_trait;
use skillhub_core::config::MAX_SKILLS_LIMIT;
use skillhub_core::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use tracing::debug;

use crate::handle::RouterHandle;

/// Tool that routes a user message to the best-matching skills
pub struct AnalyzeAndRouteTool {
    handle: RouterHandle,
}

impl AnalyzeAndRouteTool {
    /// Create the tool
    pub fn new(handle: RouterHandle) -> Self {
        Self { handle }
    }

    fn checked_arguments(&self, call: &ToolCall) -> Result<(String, usize), ToolError> {
        let message = call
            .get_string("user_message")
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'user_message'".to_string()))?;

        if message.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "'user_message' cannot be empty".to_string(),
            ));
        }
        let length = message.chars().count();
        if length > self.handle.max_message_length() {
            return Err(ToolError::InvalidArguments(format!(
                "'user_message' is {} characters, limit is {}",
                length,
                self.handle.max_message_length()
            )));
        }

        let max_skills = match call.arguments.get("max_skills") {
            None => self.handle.default_max_skills(),
            Some(_) => call.get_usize("max_skills").ok_or_else(|| {
                ToolError::InvalidArguments("'max_skills' must be an integer".to_string())
            })?,
        };
        if !(1..=MAX_SKILLS_LIMIT).contains(&max_skills) {
            return Err(ToolError::InvalidArguments(format!(
                "'max_skills' must be between 1 and {}",
                MAX_SKILLS_LIMIT
            )));
        }

        Ok((message, max_skills))
    }
}

#[async_trait]
impl Tool for AnalyzeAndRouteTool {
    fn name(&self) -> &str {
        "analyze_and_route"
    }

    fn description(&self) -> &str {
        "Analyze a user message, detect its language and intent, and activate the best-matching skills for this session."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::string("user_message", "The user message to analyze"),
                ToolParameter::integer(
                    "max_skills",
                    "Maximum number of skills to activate (1-5)",
                )
                .optional()
                .with_default(self.handle.default_max_skills() as i64),
                ToolParameter::optional_string(
                    "session_id",
                    "Session to activate skills in; defaults to this connection's session",
                ),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        self.checked_arguments(call).map(|_| ())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let (message, max_skills) = self.checked_arguments(call)?;
        let session_id = self.handle.session_id(call);

        debug!(session = %session_id, max_skills, "routing message");
        let outcome = self
            .handle
            .router()
            .analyze_and_route(&session_id, &message, max_skills)
            .await;

        let payload = serde_json::to_string(&outcome)?;
        Ok(ToolResult::success(&call.id, self.name(), payload))
    }
}
