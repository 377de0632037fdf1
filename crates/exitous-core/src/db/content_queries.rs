//! Archive state of library tasks and tips.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use super::scope_of;
use crate::{
    error::{DatabaseResultExt, GuidanceError, Result},
    models::{MasterTask, MasterTip},
};

const SELECT_TASK_SQL: &str = "SELECT data FROM tasks WHERE scope = ?1 AND id = ?2";
const UPDATE_TASK_SQL: &str =
    "UPDATE tasks SET data = ?1, updated_at = ?2 WHERE scope = ?3 AND id = ?4";
const SELECT_TIP_SQL: &str = "SELECT data FROM tips WHERE scope = ?1 AND id = ?2";
const UPDATE_TIP_SQL: &str =
    "UPDATE tips SET data = ?1, updated_at = ?2 WHERE scope = ?3 AND id = ?4";

impl super::Database {
    /// Archives or restores a task in the master library or a company's
    /// custom tasks.
    ///
    /// Archived tasks stay referenceable by rules but are dropped from
    /// resolution output.
    pub fn set_task_active(
        &mut self,
        company_id: Option<&str>,
        task_id: &str,
        active: bool,
    ) -> Result<MasterTask> {
        let scope = scope_of(company_id);
        let mut task: MasterTask = self
            .select_item(SELECT_TASK_SQL, scope, task_id)?
            .ok_or_else(|| GuidanceError::TaskNotFound {
                id: task_id.to_string(),
            })?;

        task.is_active = active;
        self.update_item(UPDATE_TASK_SQL, scope, task_id, &task)?;
        Ok(task)
    }

    /// Archives or restores a tip in the master library or a company's
    /// custom tips.
    pub fn set_tip_active(
        &mut self,
        company_id: Option<&str>,
        tip_id: &str,
        active: bool,
    ) -> Result<MasterTip> {
        let scope = scope_of(company_id);
        let mut tip: MasterTip = self
            .select_item(SELECT_TIP_SQL, scope, tip_id)?
            .ok_or_else(|| GuidanceError::TipNotFound {
                id: tip_id.to_string(),
            })?;

        tip.is_active = active;
        self.update_item(UPDATE_TIP_SQL, scope, tip_id, &tip)?;
        Ok(tip)
    }

    fn select_item<T: DeserializeOwned>(
        &self,
        sql: &str,
        scope: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let data = self
            .connection
            .query_row(sql, params![scope, id], |row| row.get::<_, String>(0))
            .optional()
            .db_context("Failed to query library item")?;

        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    fn update_item<T: Serialize>(&self, sql: &str, scope: &str, id: &str, item: &T) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(sql, params![serde_json::to_string(item)?, now, scope, id])
            .db_context("Failed to update library item")?;
        Ok(())
    }
}
