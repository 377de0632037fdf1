//! MCP server implementation for Exitous
//!
//! Exposes guidance resolution to AI assistants over the Model Context
//! Protocol on stdio. The server is read-only: catalog changes go through the
//! CLI.

use std::sync::Arc;

use anyhow::Result;
use exitous_core::Guide;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CompanyScope, ListQuestions, McpResult, ResolveGuidance};

const INSTRUCTIONS: &str = r#"Exitous helps people leaving a job by telling them which exit tasks and tips apply to their situation.

## Core Concepts
- **Questions**: profile and assessment questions, merged from master content and a company's customizations
- **Rules**: map answers (or computed age/tenure) to tasks and tips
- **Tasks / Tips**: ranked guidance returned by resolution, High priority first

## Workflow
1. `list_companies` to find the company id (omit it to use master content only)
2. `list_questions` to see which questions to ask; pass answers to see only the currently visible follow-ups
3. `resolve_guidance` with the answers, optional birth_year, start_date and final_date (YYYY-MM-DD)
4. `validate_rules` to check a company's rules for dangling references

Answers are keyed by question id. Multi-select questions take a list of values."#;

/// MCP server for Exitous
#[derive(Clone)]
pub struct GuidanceMcpServer {
    guide: Arc<Guide>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GuidanceMcpServer {
    pub fn new(guide: Guide) -> Self {
        Self {
            guide: Arc::new(guide),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.guide.clone())
    }

    #[tool(
        name = "list_companies",
        description = "List client companies with their subscription tier, seat count and HR managers. Use the company id with the other tools to apply that company's questions, content and rules."
    )]
    async fn list_companies(&self) -> McpResult {
        self.handlers().list_companies().await
    }

    #[tool(
        name = "list_questions",
        description = "List the merged profile and assessment questions for a company (or master content when company_id is omitted), grouped by section. Set include_inactive to see deactivated questions, project_id to scope to a project, and answers to list only the questions currently visible for those answers."
    )]
    async fn list_questions(&self, params: Parameters<ListQuestions>) -> McpResult {
        self.handlers().list_questions(params).await
    }

    #[tool(
        name = "resolve_guidance",
        description = "Resolve a user's answers into ranked exit tasks and tips. Provide answers keyed by question id, and optionally birth_year, start_date and final_date (YYYY-MM-DD) for age and tenure rules. as_of sets the reference date for age (defaults to today). Set include_resources to also list external resources unlocked by the company's tier."
    )]
    async fn resolve_guidance(&self, params: Parameters<ResolveGuidance>) -> McpResult {
        self.handlers().resolve_guidance(params).await
    }

    #[tool(
        name = "validate_rules",
        description = "Check the guidance rules of master content, or master plus a company's rules, for problems: missing conditions or outcomes, unknown questions, answers that are not options, malformed age/tenure conditions, and references to unknown or archived tasks and tips."
    )]
    async fn validate_rules(&self, params: Parameters<CompanyScope>) -> McpResult {
        self.handlers().validate_rules(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for GuidanceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: GuidanceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Exitous MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
