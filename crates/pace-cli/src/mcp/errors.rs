//! Error handling utilities for MCP server

use pace_core::PaceError;
use rmcp::ErrorData;

/// Converts a pace error into an MCP error.
///
/// Caller mistakes (unknown IDs, bad input, a session already running) are
/// reported as invalid parameters so the assistant can correct the call;
/// everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PaceError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PaceError::Validation { .. } | PaceError::Conflict { .. } => {
            ErrorData::invalid_params(text, None)
        }
        e if e.is_not_found() => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
