//! Guidance rule model.

use serde::{Deserialize, Serialize};

use super::{condition::lenient_conditions, Condition};

/// How a rule is authored and grouped in the editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Keyed off direct question answers
    #[default]
    Direct,

    /// Keyed off a computed attribute (age or tenure)
    Computed,
}

/// Binds conditions to the tasks and tips they recommend.
///
/// Conditions within a rule are OR'ed: the rule fires when any of them
/// matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceRule {
    pub id: String,

    /// Question the rule is attached to in the editor
    pub question_id: String,

    #[serde(rename = "type", default)]
    pub kind: RuleKind,

    #[serde(default, deserialize_with = "lenient_conditions")]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub task_ids: Vec<String>,

    #[serde(default)]
    pub tip_ids: Vec<String>,

    /// Owning company; `None` for master rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

impl GuidanceRule {
    /// Creates a rule with no conditions or outcomes.
    pub fn new(id: &str, question_id: &str, kind: RuleKind) -> Self {
        Self {
            id: id.to_string(),
            question_id: question_id.to_string(),
            kind,
            conditions: Vec::new(),
            task_ids: Vec::new(),
            tip_ids: Vec::new(),
            company_id: None,
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_tasks(mut self, ids: &[&str]) -> Self {
        self.task_ids.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn with_tips(mut self, ids: &[&str]) -> Self {
        self.tip_ids.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    /// Whether the rule belongs to the master rule set.
    pub fn is_master(&self) -> bool {
        self.company_id.is_none()
    }
}
