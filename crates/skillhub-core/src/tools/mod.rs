//! Tool trait and registry
//!
//! The MCP server exposes operations as tools. Each tool validates its own
//! arguments, executes against the router, and returns a structured JSON
//! payload; the server only translates between JSON-RPC framing and these
//! calls.

pub mod base;
pub mod registry;
pub mod types;

pub use base::{Tool, ToolError};
pub use registry::{ToolRegistry, ToolRegistryBuilder};
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
