//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created by earlier versions.
    fn apply_migrations(&self) -> Result<()> {
        // Section order used to live inside the assignment document.
        let has_section_order: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('companies') WHERE name = 'section_order'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_section_order {
            self.connection
                .execute(
                    "ALTER TABLE companies ADD COLUMN section_order TEXT NOT NULL DEFAULT '[]'",
                    [],
                )
                .db_context("Failed to add section_order column to companies table")?;
        }

        Ok(())
    }
}
