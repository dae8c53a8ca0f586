//! MCP stdio server
//!
//! Reads newline-delimited JSON-RPC from stdin and writes responses to
//! stdout, one message per line. Nothing else may touch stdout while the
//! server runs; logs go to stderr.

use crate::error::HubResult;
use crate::tools::{ToolCall, ToolRegistry};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::protocol::{
    methods, CallToolParams, CallToolResult, ContentBlock, IncomingMessage, InitializeResult,
    RpcError, RpcRequest, RpcResponse, ServerCapabilities, ServerInfo, ToolCapabilities, ToolInfo,
    MCP_PROTOCOL_VERSION,
};

/// MCP server over stdio
pub struct McpServer {
    tools: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    /// Create a server over a tool registry
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools,
            info: ServerInfo {
                name: "skillhub".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve requests until stdin closes
    pub async fn run(&self) -> HubResult<()> {
        info!(tools = self.tools.len(), "MCP server listening on stdio");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let json = serde_json::to_string(&response)?;
                stdout.write_all(json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw input line; `None` means no response is due
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        match serde_json::from_str::<IncomingMessage>(line) {
            Ok(IncomingMessage::Request(request)) => Some(self.handle_request(request).await),
            Ok(IncomingMessage::Notification(notification)) => {
                debug!(method = %notification.method, "notification received");
                None
            }
            Err(e) => {
                warn!(error = %e, "unparseable message");
                Some(RpcResponse::error(None, RpcError::parse_error()))
            }
        }
    }

    /// Dispatch one request
    pub async fn handle_request(&self, request: RpcRequest) -> RpcResponse {
        let id = request.id.clone();
        let method = request.method.clone();
        match method.as_str() {
            methods::INITIALIZE => {
                let result = InitializeResult {
                    protocol_version: MCP_PROTOCOL_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        tools: Some(ToolCapabilities { list_changed: false }),
                    },
                    server_info: self.info.clone(),
                };
                match serde_json::to_value(result) {
                    Ok(value) => RpcResponse::success(id, value),
                    Err(e) => {
                        RpcResponse::error(Some(id), RpcError::internal_error(e.to_string()))
                    }
                }
            }
            methods::PING => RpcResponse::success(id, Value::Object(serde_json::Map::new())),
            methods::TOOLS_LIST => {
                let tools: Vec<ToolInfo> = self
                    .tools
                    .schemas()
                    .into_iter()
                    .map(|schema| ToolInfo {
                        name: schema.name,
                        description: schema.description,
                        input_schema: schema.parameters,
                    })
                    .collect();
                RpcResponse::success(id, serde_json::json!({ "tools": tools }))
            }
            methods::TOOLS_CALL => self.handle_tool_call(request).await,
            other => {
                warn!(method = other, "unknown method");
                RpcResponse::error(Some(id), RpcError::method_not_found())
            }
        }
    }

    async fn handle_tool_call(&self, request: RpcRequest) -> RpcResponse {
        let id = request.id.clone();

        let params = match request.params {
            Some(params) => params,
            None => {
                return RpcResponse::error(
                    Some(id),
                    RpcError::invalid_params("tools/call requires params"),
                )
            }
        };
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return RpcResponse::error(
                    Some(id),
                    RpcError::invalid_params(format!("Malformed tools/call params: {}", e)),
                )
            }
        };

        let Some(tool) = self.tools.get(&params.name) else {
            return RpcResponse::error(
                Some(id),
                RpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            );
        };

        let call = ToolCall::new(id.to_string(), params.name.clone(), params.arguments);
        let result = tool.run(&call).await;

        // Tool failures become in-band error content, not protocol errors
        let payload = if result.success {
            CallToolResult {
                content: vec![ContentBlock::text(result.output.unwrap_or_default())],
                is_error: false,
            }
        } else {
            CallToolResult {
                content: vec![ContentBlock::text(result.error.unwrap_or_default())],
                is_error: true,
            }
        };

        match serde_json::to_value(payload) {
            Ok(value) => RpcResponse::success(id, value),
            Err(e) => RpcResponse::error(Some(id), RpcError::internal_error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Tool, ToolError, ToolRegistryBuilder, ToolResult, ToolSchema};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedTool;

    #[async_trait]
    impl Tool for FixedTool {
        fn name(&self) -> &str {
            "fixed"
        }

        fn description(&self) -> &str {
            "Returns a fixed payload"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new("fixed", "Returns a fixed payload", vec![])
        }

        fn validate(&self, call: &crate::tools::ToolCall) -> Result<(), ToolError> {
            if call.arguments.contains_key("poison") {
                return Err(ToolError::InvalidArguments("poisoned".to_string()));
            }
            Ok(())
        }

        async fn execute(
            &self,
            call: &crate::tools::ToolCall,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, "fixed", r#"{"ok":true}"#))
        }
    }

    fn test_server() -> McpServer {
        let registry = ToolRegistryBuilder::new().with_tool(Arc::new(FixedTool)).build();
        McpServer::new(registry)
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = test_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .unwrap();

        assert!(response.is_success());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "skillhub");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = test_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .unwrap();

        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "fixed");
        assert!(tools[0]["inputSchema"].is_object());
    }

    #[tokio::test]
    async fn test_tool_call_success() {
        let server = test_server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"fixed","arguments":{}}}"#,
            )
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_tool_validation_failure_is_in_band() {
        let server = test_server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"fixed","arguments":{"poison":1}}}"#,
            )
            .await
            .unwrap();

        // Protocol-level success, tool-level error
        assert!(response.is_success());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("poisoned"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = test_server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nope"}}"#,
            )
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = test_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":6,"method":"resources/list"}"#)
            .await
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = test_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = test_server();
        let response = server.handle_line("this is not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, -32700);
        assert!(response.id.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let server = test_server();
        let response = server
            .handle_line(r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#)
            .await
            .unwrap();
        assert!(response.is_success());
    }
}
