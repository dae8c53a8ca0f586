//! Tool implementations for the Skillhub MCP server
//!
//! Six tools over the routing engine: one activates skills from a message,
//! three manage session state, two expose the skill index. All of them
//! validate their arguments here, at the boundary, so the core never sees
//! out-of-range input.

pub mod analyze;
pub mod deactivate;
pub mod handle;
pub mod index;
pub mod list_active;
pub mod search;

pub use analyze::AnalyzeAndRouteTool;
pub use deactivate::{DeactivateAllSkillsTool, DeactivateSkillTool};
pub use handle::RouterHandle;
pub use index::GetSkillIndexTool;
pub use list_active::ListActiveSkillsTool;
pub use search::SearchSkillsTool;

use skillhub_core::Tool;
use std::sync::Arc;

/// Build the full tool set over one router handle
pub fn default_tools(handle: RouterHandle) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(AnalyzeAndRouteTool::new(handle.clone())),
        Arc::new(ListActiveSkillsTool::new(handle.clone())),
        Arc::new(DeactivateSkillTool::new(handle.clone())),
        Arc::new(DeactivateAllSkillsTool::new(handle.clone())),
        Arc::new(GetSkillIndexTool::new(handle.clone())),
        Arc::new(SearchSkillsTool::new(handle)),
    ]
}
