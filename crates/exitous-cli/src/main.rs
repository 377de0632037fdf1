//! Exitous CLI application
//!
//! Command-line interface and MCP server for the Exitous guidance engine.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use exitous_core::GuideBuilder;
use log::info;
use mcp::{run_stdio_server, GuidanceMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let guide = GuideBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize guidance store")?;

    info!("Exitous started");

    if let Some(Serve) = command {
        info!("Starting Exitous MCP server");
        return run_stdio_server(GuidanceMcpServer::new(guide))
            .await
            .context("MCP server failed");
    }

    let cli = Cli::new(guide, TerminalRenderer::new(!no_color));
    match command {
        Some(Import(args)) => cli.import(args).await,
        Some(Export(args)) => cli.export(args).await,
        Some(Company { command }) => cli.handle_company_command(command).await,
        Some(Questions(args)) => cli.questions(args).await,
        Some(Resolve(args)) => cli.resolve(args).await,
        Some(Validate(args)) => cli.validate(args).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Tip { command }) => cli.handle_tip_command(command).await,
        Some(Serve) | None => cli.list_companies().await,
    }
}
