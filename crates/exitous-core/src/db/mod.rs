//! SQLite store for the guidance catalog.
//!
//! The store owns persistence only. Resolution never reads it directly: the
//! store loads an immutable [`crate::snapshot::GuidanceSnapshot`] and the pure
//! engine runs against that.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod catalog_queries;
pub mod content_queries;
pub mod migrations;

/// Scope value of platform-owned master content.
pub(crate) const MASTER_SCOPE: &str = "";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Maps an optional company id to its storage scope.
pub(crate) fn scope_of(company_id: Option<&str>) -> &str {
    company_id.unwrap_or(MASTER_SCOPE)
}
