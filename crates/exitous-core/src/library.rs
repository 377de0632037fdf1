//! Merged task and tip library.

use serde::{Deserialize, Serialize};

use crate::models::{MasterTask, MasterTip};

/// Master and company-specific tasks and tips in catalog order.
///
/// Catalog order is the stable tie-break when resolved content is ranked by
/// priority, so it is preserved exactly as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    pub tasks: Vec<MasterTask>,
    #[serde(default)]
    pub tips: Vec<MasterTip>,
}

impl Library {
    pub fn new(tasks: Vec<MasterTask>, tips: Vec<MasterTip>) -> Self {
        Self { tasks, tips }
    }

    /// Merges company content into the master library.
    ///
    /// A company item whose id matches a master item replaces it in place;
    /// other company items are appended.
    pub fn merged(
        master_tasks: Vec<MasterTask>,
        master_tips: Vec<MasterTip>,
        company_tasks: Vec<MasterTask>,
        company_tips: Vec<MasterTip>,
    ) -> Self {
        let mut tasks = master_tasks;
        for task in company_tasks {
            match tasks.iter_mut().find(|t| t.id == task.id) {
                Some(existing) => *existing = task,
                None => tasks.push(task),
            }
        }

        let mut tips = master_tips;
        for tip in company_tips {
            match tips.iter_mut().find(|t| t.id == tip.id) {
                Some(existing) => *existing = tip,
                None => tips.push(tip),
            }
        }

        Self { tasks, tips }
    }

    /// Catalog position and record of a task.
    pub fn task(&self, id: &str) -> Option<(usize, &MasterTask)> {
        self.tasks.iter().enumerate().find(|(_, t)| t.id == id)
    }

    /// Catalog position and record of a tip.
    pub fn tip(&self, id: &str) -> Option<(usize, &MasterTip)> {
        self.tips.iter().enumerate().find(|(_, t)| t.id == id)
    }
}
