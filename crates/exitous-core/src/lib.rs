//! Core library for Exitous, an assistant for people leaving a job.
//!
//! Given a user's profile and assessment answers, this crate decides which
//! exit tasks and tips apply to them. Companies customize the platform's
//! master content with question overrides, custom questions, custom
//! tasks/tips and their own guidance rules.
//!
//! # Layers
//!
//! - **Models** ([`models`]): questions, rules, conditions, content records
//!   and company configuration, all in the catalog's JSON shape
//! - **Merging** ([`questions`], [`library`], [`snapshot`]): master content
//!   combined with one company's configuration into an immutable snapshot
//! - **Engine** ([`engine`]): pure resolution of answers into ranked guidance
//! - **Store** ([`db`]): SQLite persistence of the catalog
//! - **Facade** ([`guide`]): async API used by the CLI and MCP server
//! - **Display** ([`display`]): markdown formatting of results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use exitous_core::{
//!     params::{ImportCatalog, ResolveGuidance},
//!     GuideBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let guide = GuideBuilder::new()
//!     .with_database_path(Some("exitous.db"))
//!     .build()
//!     .await?;
//!
//! guide
//!     .import_catalog(&ImportCatalog {
//!         path: "catalog.json".to_string(),
//!     })
//!     .await?;
//!
//! let mut params = ResolveGuidance::default();
//! params.answers.answers.insert("hadMedicalInsurance".to_string(), "Yes".into());
//! let report = guide.resolve(&params).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod guide;
pub mod library;
pub mod models;
pub mod params;
pub mod questions;
pub mod resources;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use db::{catalog_queries::ImportSummary, Database};
pub use display::{Companies, ContentStatus, GuidanceReport, QuestionList, ValidationReport};
pub use engine::{resolve_guidance, GuidanceResolution, ResolvedTask, ResolvedTip};
pub use error::{GuidanceError, Result};
pub use guide::{Guide, GuideBuilder};
pub use library::Library;
pub use models::{
    AnswerSet, AnswerValue, CompanyAssignment, CompanyConfig, Condition, ExternalResource,
    GuidanceRule, MasterTask, MasterTip, Priority, Question, RuleKind, SubscriptionTier,
};
pub use params::{
    AnswersInput, CompanyScope, ContentId, ImportCatalog, ListQuestions, ResolveGuidance,
};
pub use questions::{resolve_questions, MergedCatalog};
pub use snapshot::{CatalogDocument, CompanyDocument, GuidanceSnapshot, MasterCatalog};
pub use validation::{validate_rules, IssueKind, RuleIssue};
