//! Tool registry for dispatching MCP calls

use crate::tools::base::Tool;
use crate::tools::types::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of available tools
///
/// Preserves registration order so `tools/list` responses are stable
/// between calls and across restarts.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool; re-registering a name replaces it in place
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Tool names, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Schemas for every tool, in registration order
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.schema())
            .collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether any tool is registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Builder for a tool registry
#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add multiple tools
    pub fn with_tools(mut self, tools: Vec<Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Build the registry
    pub fn build(self) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        for tool in self.tools {
            registry.register(tool);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::base::ToolError;
    use crate::tools::types::{ToolCall, ToolResult};
    use async_trait::async_trait;

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "echo"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name, "echo", vec![])
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, self.name, "{}"))
        }
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = ToolRegistryBuilder::new()
            .with_tool(Arc::new(EchoTool { name: "zeta" }))
            .with_tool(Arc::new(EchoTool { name: "alpha" }))
            .build();

        assert_eq!(registry.tool_names(), vec!["zeta", "alpha"]);
        assert_eq!(registry.schemas().len(), 2);
        assert!(registry.has_tool("alpha"));
        assert!(!registry.has_tool("missing"));
    }

    #[test]
    fn test_reregister_replaces_without_duplicating() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "echo" }));
        registry.register(Arc::new(EchoTool { name: "echo" }));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.tool_names(), vec!["echo"]);
    }
}
