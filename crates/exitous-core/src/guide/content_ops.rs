//! Archiving and restoring library tasks and tips.

use log::info;

use super::Guide;
use crate::{
    display::ContentStatus,
    error::Result,
    models::{MasterTask, MasterTip},
    params::ContentId,
};

impl Guide {
    /// Archives a task. Rules referencing it stay valid but stop selecting it.
    pub async fn archive_task(&self, params: &ContentId) -> Result<ContentStatus<MasterTask>> {
        self.set_task_active(params, false).await
    }

    /// Restores an archived task.
    pub async fn unarchive_task(&self, params: &ContentId) -> Result<ContentStatus<MasterTask>> {
        self.set_task_active(params, true).await
    }

    /// Archives a tip.
    pub async fn archive_tip(&self, params: &ContentId) -> Result<ContentStatus<MasterTip>> {
        self.set_tip_active(params, false).await
    }

    /// Restores an archived tip.
    pub async fn unarchive_tip(&self, params: &ContentId) -> Result<ContentStatus<MasterTip>> {
        self.set_tip_active(params, true).await
    }

    async fn set_task_active(
        &self,
        params: &ContentId,
        active: bool,
    ) -> Result<ContentStatus<MasterTask>> {
        let ContentId { company_id, id } = params.clone();
        let task = self
            .with_database(move |db| db.set_task_active(company_id.as_deref(), &id, active))
            .await?;
        info!("Set task {} active={active}", task.id);
        Ok(ContentStatus::new("task", task))
    }

    async fn set_tip_active(
        &self,
        params: &ContentId,
        active: bool,
    ) -> Result<ContentStatus<MasterTip>> {
        let ContentId { company_id, id } = params.clone();
        let tip = self
            .with_database(move |db| db.set_tip_active(company_id.as_deref(), &id, active))
            .await?;
        info!("Set tip {} active={active}", tip.id);
        Ok(ContentStatus::new("tip", tip))
    }
}
