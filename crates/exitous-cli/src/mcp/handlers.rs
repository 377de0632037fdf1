//! MCP tool handler implementations

use std::sync::Arc;

use exitous_core::{params as core, Guide};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// MCP wrapper for core parameter types.
///
/// Deserializes transparently into the wrapped core type and forwards its
/// JSON schema, so the core stays free of MCP types.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type CompanyScope = McpParams<core::CompanyScope>;
pub type ListQuestions = McpParams<core::ListQuestions>;
pub type ResolveGuidance = McpParams<core::ResolveGuidance>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn markdown(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    guide: Arc<Guide>,
}

impl McpHandlers {
    pub fn new(guide: Arc<Guide>) -> Self {
        Self { guide }
    }

    pub async fn list_companies(&self) -> McpResult {
        debug!("list_companies");
        let companies = self
            .guide
            .list_companies()
            .await
            .map_err(|e| to_mcp_error("Failed to list companies", &e))?;
        markdown(companies.to_string())
    }

    pub async fn list_questions(
        &self,
        Parameters(params): Parameters<ListQuestions>,
    ) -> McpResult {
        debug!("list_questions: {params:?}");
        let questions = self
            .guide
            .list_questions(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list questions", &e))?;
        markdown(questions.to_string())
    }

    pub async fn resolve_guidance(
        &self,
        Parameters(params): Parameters<ResolveGuidance>,
    ) -> McpResult {
        debug!("resolve_guidance: {params:?}");
        let report = self
            .guide
            .resolve(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve guidance", &e))?;
        markdown(report.to_string())
    }

    pub async fn validate_rules(&self, Parameters(params): Parameters<CompanyScope>) -> McpResult {
        debug!("validate_rules: {params:?}");
        let report = self
            .guide
            .validate_rules(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to validate rules", &e))?;
        markdown(report.to_string())
    }
}
