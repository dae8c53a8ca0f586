//! Base trait and error type for tools

use crate::error::HubError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<HubError> for ToolError {
    fn from(err: HubError) -> Self {
        match err {
            HubError::NotFound { message, .. } => ToolError::NotFound(message),
            HubError::InvalidInput { message, .. } => ToolError::InvalidArguments(message),
            other => ToolError::ExecutionFailed(other.to_string()),
        }
    }
}

/// Base trait for all tools
///
/// A tool is one operation on the skills controller. Names follow the
/// lowercase-with-underscores convention (e.g. "analyze_and_route").
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name
    fn name(&self) -> &str;

    /// The tool's description, shown to the MCP client
    fn description(&self) -> &str;

    /// The tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Validate the call arguments
    ///
    /// Default implementation does nothing. Override for custom validation.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Execute the tool
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate, then execute, folding failures into an error result
    async fn run(&self, call: &ToolCall) -> ToolResult {
        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string());
        }
        match self.execute(call).await {
            Ok(result) => result,
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_error_conversion() {
        let err: ToolError = HubError::not_found("frontend-design").into();
        assert!(matches!(err, ToolError::NotFound(_)));

        let err: ToolError = HubError::invalid_input("too long").into();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err: ToolError = HubError::registry("scan failed").into();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }
}
