//! Company subscription and per-company guidance configuration.

use serde::{Deserialize, Serialize};

use super::{GuidanceRule, MasterTask, MasterTip, PermissionLevel, Question, SubscriptionTier};

/// An HR manager on a company's roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HrManager {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub permission: PermissionLevel,
}

/// A client company's subscription, seats and HR roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAssignment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tier: SubscriptionTier,
    #[serde(default)]
    pub max_users: u32,
    #[serde(default)]
    pub hr_managers: Vec<HrManager>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Default number of days users get to complete their exit tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_deadline_days: Option<u32>,
}

impl CompanyAssignment {
    /// Permission level of the HR manager with the given email.
    ///
    /// Emails compare case-insensitively.
    pub fn permission_for(&self, email: &str) -> Option<PermissionLevel> {
        self.hr_managers
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
            .map(|m| m.permission)
    }

    /// Whether the HR manager may change company questions, content or rules.
    pub fn can_edit_guidance(&self, email: &str) -> bool {
        matches!(
            self.permission_for(email),
            Some(PermissionLevel::Admin | PermissionLevel::Edit)
        )
    }
}

/// A company's overrides and additions on top of the master catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyConfig {
    #[serde(default)]
    pub company_id: String,

    /// Preferred section order for the company's forms
    #[serde(default)]
    pub section_order: Vec<String>,

    /// Full replacements for master questions, matched by id
    #[serde(default)]
    pub question_overrides: Vec<Question>,

    #[serde(default)]
    pub custom_questions: Vec<Question>,

    #[serde(default)]
    pub custom_tasks: Vec<MasterTask>,

    #[serde(default)]
    pub custom_tips: Vec<MasterTip>,

    #[serde(default)]
    pub rules: Vec<GuidanceRule>,
}

impl CompanyConfig {
    /// Empty configuration for a company.
    pub fn new(company_id: &str) -> Self {
        Self {
            company_id: company_id.to_string(),
            ..Default::default()
        }
    }
}
