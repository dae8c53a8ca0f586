//! MCP server command

use skillhub_core::{Config, McpServer, ToolRegistryBuilder};
use skillhub_tools::{default_tools, RouterHandle};
use std::sync::Arc;

use super::build_router;

/// Run the MCP server on stdio until the client disconnects
pub async fn run(config: Config) -> anyhow::Result<()> {
    let router = Arc::new(build_router(&config).await?);
    let handle = RouterHandle::new(router, &config);
    let tools = ToolRegistryBuilder::new()
        .with_tools(default_tools(handle))
        .build();

    McpServer::new(tools).run().await?;
    Ok(())
}
