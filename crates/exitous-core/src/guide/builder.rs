//! Builder for creating and configuring Guide instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Guide;
use crate::{
    db::Database,
    error::{GuidanceError, Result},
};

/// Builder for creating and configuring Guide instances.
#[derive(Debug, Clone, Default)]
pub struct GuideBuilder {
    database_path: Option<PathBuf>,
}

impl GuideBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/exitous/exitous.db` or
    /// `~/.local/share/exitous/exitous.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the guide, creating the database and its schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::FileSystem` if the parent directory cannot be
    /// created and `GuidanceError::Database` if initialization fails.
    pub async fn build(self) -> Result<Guide> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GuidanceError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening guidance store at {}", db_path.display());
        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(GuidanceError::join)??;

        Ok(Guide::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("exitous")
            .place_data_file("exitous.db")
            .map_err(|e| GuidanceError::XdgDirectory(e.to_string()))
    }
}
