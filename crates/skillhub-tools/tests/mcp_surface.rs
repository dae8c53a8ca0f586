//! Full MCP surface test: protocol framing down to session state

use skillhub_core::{Config, McpServer, SkillRegistry, SkillRouter, ToolRegistryBuilder};
use skillhub_tools::{default_tools, RouterHandle};
use std::sync::Arc;

fn server() -> McpServer {
    let mut registry = SkillRegistry::new();
    registry.register_builtins();
    let handle = RouterHandle::new(Arc::new(SkillRouter::new(registry)), &Config::default());
    let tools = ToolRegistryBuilder::new().with_tools(default_tools(handle)).build();
    McpServer::new(tools)
}

/// Extract the tool payload from a tools/call response
fn tool_payload(response: &skillhub_core::mcp::RpcResponse) -> serde_json::Value {
    let result = response.result.as_ref().expect("result");
    assert_eq!(result["isError"], false, "tool errored: {:?}", result);
    serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn initialize_then_list_tools() {
    let server = server();

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"0"}}}"#)
        .await
        .unwrap();
    assert!(response.is_success());

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "analyze_and_route",
            "list_active_skills",
            "deactivate_skill",
            "deactivate_all_skills",
            "get_skill_index",
            "search_skills",
        ]
    );
}

#[tokio::test]
async fn route_activate_list_deactivate_cycle() {
    let server = server();

    // Activate via analysis
    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"analyze_and_route","arguments":{"user_message":"写E2E测试","max_skills":2,"session_id":"cycle"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["status"], "activated");
    assert_eq!(payload["detected_intent"], "test_write_e2e");
    assert_eq!(payload["activated_skills"][0]["name"], "e2e-testing");

    // List shows it
    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"list_active_skills","arguments":{"session_id":"cycle"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["active_skills"][0], "e2e-testing");
    assert_eq!(payload["context_summary"], "写E2E测试");

    // Deactivate all clears it
    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"deactivate_all_skills","arguments":{"session_id":"cycle"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["status"], "all_deactivated");
    assert_eq!(payload["count"], 1);

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_active_skills","arguments":{"session_id":"cycle"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert!(payload["active_skills"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn sessions_are_isolated_over_the_wire() {
    let server = server();

    server
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"analyze_and_route","arguments":{"user_message":"创建一个React组件","session_id":"a"}}}"#)
        .await
        .unwrap();
    server
        .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"analyze_and_route","arguments":{"user_message":"查看React源码","session_id":"b"}}}"#)
        .await
        .unwrap();

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_active_skills","arguments":{"session_id":"a"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["active_skills"][0], "frontend-design");
    assert_eq!(payload["active_skills"].as_array().unwrap().len(), 1);

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_active_skills","arguments":{"session_id":"b"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["active_skills"][0], "source-research");
    assert_eq!(payload["active_skills"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_arguments_surface_in_band() {
    let server = server();

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"analyze_and_route","arguments":{"user_message":"deploy","max_skills":9}}}"#)
        .await
        .unwrap();

    // JSON-RPC succeeds; the tool reports the validation failure
    assert!(response.is_success());
    let result = response.result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("max_skills"));
}

#[tokio::test]
async fn index_and_search_read_the_catalog() {
    let server = server();

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"get_skill_index","arguments":{}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert!(payload["total"].as_u64().unwrap() >= 6);

    let response = server
        .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search_skills","arguments":{"keyword":"源码"}}}"#)
        .await
        .unwrap();
    let payload = tool_payload(&response);
    assert_eq!(payload["matches"], 1);
    assert_eq!(payload["skills"][0]["name"], "source-research");
}
