//! High-level guidance API.
//!
//! [`Guide`] is the entry point the CLI and MCP server use. Each call opens
//! the store on a blocking thread, loads what it needs and, for resolution,
//! hands an immutable [`crate::snapshot::GuidanceSnapshot`] to the pure
//! engine:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Guide      │    │    Database     │    │     Engine      │
//! │ (async facade)  │───▶│ (load snapshot) │───▶│ (pure resolve)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Guide`] instances
//! - [`catalog_ops`]: Import, export, companies and questions
//! - [`resolve_ops`]: Guidance resolution and rule validation
//! - [`content_ops`]: Archiving library tasks and tips
//!
//! # Example
//!
//! ```rust,no_run
//! use exitous_core::{params::ResolveGuidance, GuideBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let guide = GuideBuilder::new()
//!     .with_database_path(Some("/tmp/exitous.db"))
//!     .build()
//!     .await?;
//!
//! let report = guide.resolve(&ResolveGuidance::default()).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{GuidanceError, Result},
};

pub mod builder;
pub mod catalog_ops;
pub mod content_ops;
pub mod resolve_ops;

#[cfg(test)]
mod tests;

pub use builder::GuideBuilder;

/// Main guidance interface.
pub struct Guide {
    pub(crate) db_path: PathBuf,
}

impl Guide {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on a blocking thread.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(GuidanceError::join)?
    }
}
