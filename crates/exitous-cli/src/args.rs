use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CompanyCommands, ContentCommands, ExportArgs, ImportArgs, QuestionsArgs, ResolveArgs,
    ValidateArgs,
};

/// Exitous guidance engine
///
/// Resolves a departing employee's answers into the exit tasks and tips that
/// apply to them, using the platform's master content and each client
/// company's customizations. Runs as a command-line tool or as an MCP server
/// for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "exitous")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/exitous/exitous.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command, the configured companies are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Replace the stored catalog with a JSON catalog document
    Import(ImportArgs),
    /// Write the stored catalog as a JSON catalog document
    Export(ExportArgs),
    /// Inspect client companies
    #[command(alias = "c")]
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
    /// List the merged questions of master content or a company
    #[command(alias = "q")]
    Questions(QuestionsArgs),
    /// Resolve answers into ranked tasks and tips
    #[command(alias = "r")]
    Resolve(ResolveArgs),
    /// Check guidance rules for problems
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Archive or restore library tasks
    Task {
        #[command(subcommand)]
        command: ContentCommands,
    },
    /// Archive or restore library tips
    Tip {
        #[command(subcommand)]
        command: ContentCommands,
    },
    /// Start the MCP server
    Serve,
}
