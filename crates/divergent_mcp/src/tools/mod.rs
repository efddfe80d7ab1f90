//! MCP tools for the divergent thinking server
//!
//! Each submodule contributes its own tool router to [`crate::DivergentMcpServer`].

pub mod catalog;
pub mod techniques;
pub mod thinking;

pub use catalog::{CatalogParams, ResolveDomainParams};
pub use techniques::CreativityTechniqueParams;
pub use thinking::DivergentThinkingParams;

use divergent_core::CreativityError;
use rmcp::ErrorData as McpError;
use tracing::warn;

/// Caller mistakes become `invalid_params`; anything else is an internal error.
pub(crate) fn to_mcp_error(err: CreativityError) -> McpError {
    if err.is_invalid_input() {
        warn!(error = %err, "Rejected tool input");
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}
