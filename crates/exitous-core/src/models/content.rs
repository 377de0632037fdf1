//! Task, tip and external resource content records.

use serde::{Deserialize, Serialize};

use super::{Priority, SubscriptionTier, TipType};

fn default_active() -> bool {
    true
}

/// An actionable task recommended to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasterTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,

    /// External resources that help with this task
    #[serde(default)]
    pub related_resource_ids: Vec<String>,

    /// Archived tasks are never resolved
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Owning company; `None` for master tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// An informational tip shown alongside tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasterTip {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "type")]
    pub tip_type: TipType,
    #[serde(default)]
    pub is_company_specific: bool,

    /// Archived tips are never resolved
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Directory entry for a third-party professional or service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalResource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Tasks this resource helps with
    #[serde(default)]
    pub related_task_ids: Vec<String>,

    /// Minimum subscription tier that unlocks this resource
    #[serde(default)]
    pub tier: SubscriptionTier,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ExternalResource {
    /// Whether a company on `tier` may see this resource.
    pub fn available_to(&self, tier: SubscriptionTier) -> bool {
        self.is_active && self.tier <= tier
    }
}
