//! Command-line argument wrappers and command handlers.
//!
//! Each command's clap struct converts into the matching core parameter type,
//! so clap attributes never leak into `exitous-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Guide
//! ```
//!
//! Commands that take an answers file read and parse it here; everything else
//! is validated by the core.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use exitous_core::{
    display::ContentStatus,
    params::{
        AnswersInput, CompanyScope, ContentId, ImportCatalog, ListQuestions, ResolveGuidance,
    },
    Guide,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Replace the stored catalog
#[derive(Args)]
pub struct ImportArgs {
    /// JSON catalog document with master content and companies
    pub file: PathBuf,
}

impl From<ImportArgs> for ImportCatalog {
    fn from(val: ImportArgs) -> Self {
        ImportCatalog {
            path: val.file.display().to_string(),
        }
    }
}

/// Export the stored catalog
#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// List companies with their tier and HR roster
    #[command(aliases = ["l", "ls"])]
    List,
}

/// List merged questions
#[derive(Args)]
pub struct QuestionsArgs {
    /// Company whose overrides and custom questions apply
    #[arg(short, long)]
    pub company: Option<String>,
    /// Include deactivated questions
    #[arg(long)]
    pub all: bool,
    /// Only show questions available in this project
    #[arg(short, long)]
    pub project: Option<String>,
    /// Answers file; when given, only questions visible for these answers are
    /// listed
    #[arg(short, long)]
    pub answers: Option<PathBuf>,
}

impl TryFrom<QuestionsArgs> for ListQuestions {
    type Error = anyhow::Error;

    fn try_from(val: QuestionsArgs) -> Result<Self> {
        Ok(ListQuestions {
            company_id: val.company,
            include_inactive: val.all,
            project_id: val.project,
            answers: val.answers.as_deref().map(read_answers).transpose()?,
        })
    }
}

/// Resolve guidance for a set of answers
#[derive(Args)]
pub struct ResolveArgs {
    /// JSON answers file: {"answers": {...}, "birth_year": ..., "start_date": ..., "final_date": ...}
    #[arg(short, long)]
    pub answers: PathBuf,
    /// Company whose configuration applies
    #[arg(short, long)]
    pub company: Option<String>,
    /// Reference date for age (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<String>,
    /// Also list external resources for the resolved tasks
    #[arg(short, long)]
    pub resources: bool,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl TryFrom<&ResolveArgs> for ResolveGuidance {
    type Error = anyhow::Error;

    fn try_from(val: &ResolveArgs) -> Result<Self> {
        Ok(ResolveGuidance {
            company_id: val.company.clone(),
            answers: read_answers(&val.answers)?,
            as_of: val.as_of.clone(),
            include_resources: val.resources,
        })
    }
}

/// Check guidance rules
#[derive(Args)]
pub struct ValidateArgs {
    /// Check master rules together with this company's rules
    #[arg(short, long)]
    pub company: Option<String>,
    /// Exit with an error when any issue is found
    #[arg(long)]
    pub strict: bool,
}

impl From<&ValidateArgs> for CompanyScope {
    fn from(val: &ValidateArgs) -> Self {
        CompanyScope {
            company_id: val.company.clone(),
        }
    }
}

/// Address a task or tip
#[derive(Args)]
pub struct ContentArgs {
    /// Task or tip id
    pub id: String,
    /// Company owning the item; omit for master content
    #[arg(short, long)]
    pub company: Option<String>,
}

impl From<ContentArgs> for ContentId {
    fn from(val: ContentArgs) -> Self {
        ContentId {
            company_id: val.company,
            id: val.id,
        }
    }
}

#[derive(Subcommand)]
pub enum ContentCommands {
    /// Archive an item so it is no longer resolved
    #[command(alias = "a")]
    Archive(ContentArgs),
    /// Restore an archived item
    #[command(alias = "u")]
    Unarchive(ContentArgs),
}

fn read_answers(path: &Path) -> Result<AnswersInput> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse answers file {}", path.display()))
}

/// Runs CLI commands against a guide and renders their output.
pub struct Cli {
    guide: Guide,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(guide: Guide, renderer: TerminalRenderer) -> Self {
        Self { guide, renderer }
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let summary = self
            .guide
            .import_catalog(&args.into())
            .await
            .context("Failed to import catalog")?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let document = self
            .guide
            .export_catalog()
            .await
            .context("Failed to export catalog")?;
        let json = serde_json::to_string_pretty(&document)?;

        match args.output {
            Some(path) => std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display())),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn handle_company_command(&self, command: CompanyCommands) -> Result<()> {
        match command {
            CompanyCommands::List => self.list_companies().await,
        }
    }

    pub async fn list_companies(&self) -> Result<()> {
        let companies = self
            .guide
            .list_companies()
            .await
            .context("Failed to list companies")?;
        self.renderer.render(&companies.to_string())
    }

    pub async fn questions(&self, args: QuestionsArgs) -> Result<()> {
        let params = ListQuestions::try_from(args)?;
        let questions = self
            .guide
            .list_questions(&params)
            .await
            .context("Failed to list questions")?;
        self.renderer.render(&questions.to_string())
    }

    pub async fn resolve(&self, args: ResolveArgs) -> Result<()> {
        let params = ResolveGuidance::try_from(&args)?;
        debug!("resolve: {params:?}");
        let report = self
            .guide
            .resolve(&params)
            .await
            .context("Failed to resolve guidance")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        } else {
            self.renderer.render(&report.to_string())
        }
    }

    pub async fn validate(&self, args: ValidateArgs) -> Result<()> {
        let report = self
            .guide
            .validate_rules(&CompanyScope::from(&args))
            .await
            .context("Failed to validate rules")?;
        self.renderer.render(&report.to_string())?;

        if args.strict && !report.is_clean() {
            bail!("{} rule issue(s) found", report.issues.len());
        }
        Ok(())
    }

    pub async fn handle_task_command(&self, command: ContentCommands) -> Result<()> {
        let status = match command {
            ContentCommands::Archive(args) => self.guide.archive_task(&args.into()).await,
            ContentCommands::Unarchive(args) => self.guide.unarchive_task(&args.into()).await,
        }
        .context("Failed to update task")?;
        self.render_status(&status)
    }

    pub async fn handle_tip_command(&self, command: ContentCommands) -> Result<()> {
        let status = match command {
            ContentCommands::Archive(args) => self.guide.archive_tip(&args.into()).await,
            ContentCommands::Unarchive(args) => self.guide.unarchive_tip(&args.into()).await,
        }
        .context("Failed to update tip")?;
        self.render_status(&status)
    }

    fn render_status<T>(&self, status: &ContentStatus<T>) -> Result<()>
    where
        ContentStatus<T>: std::fmt::Display,
    {
        self.renderer.render(&status.to_string())
    }
}
