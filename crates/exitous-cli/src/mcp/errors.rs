//! Error handling utilities for the MCP server

use exitous_core::GuidanceError;
use rmcp::ErrorData;

/// Converts a guidance error into an MCP error.
///
/// Bad parameters and unknown companies are the caller's to fix and map to
/// `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &GuidanceError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        GuidanceError::InvalidInput { .. }
        | GuidanceError::CompanyNotFound { .. }
        | GuidanceError::TaskNotFound { .. }
        | GuidanceError::TipNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
