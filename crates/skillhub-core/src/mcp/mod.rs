//! Model Context Protocol surface
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout. The protocol module
//! holds the wire types; the server module owns the read-dispatch-write
//! loop and the mapping from tool results to MCP content.

pub mod protocol;
pub mod server;

pub use protocol::{RpcError, RpcNotification, RpcRequest, RpcResponse};
pub use server::McpServer;
