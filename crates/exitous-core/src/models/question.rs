//! Question model definition and visibility rules.

use serde::{Deserialize, Serialize};

use super::{AnswerSet, FormType, QuestionType};

/// A single prompt shown to a user on the profile or assessment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique key within a company's merged question set
    pub id: String,

    /// Text shown to the user
    pub label: String,

    /// Grouping name used for ordering and form sections
    pub section: String,

    /// Input kind
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Ordered choices, present for choice types
    #[serde(default)]
    pub options: Vec<String>,

    /// Inactive questions are hidden from forms but stay valid for rules
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Which form collects this question
    pub form_type: FormType,

    /// Parent question for conditionally shown follow-ups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Parent answer that reveals this follow-up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,

    /// Projects this question is scoped to; empty means all projects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl Question {
    /// Whether the question is scoped to the given project.
    ///
    /// Questions without project scoping are visible everywhere, and a request
    /// without a project sees every question.
    pub fn in_project(&self, project_id: Option<&str>) -> bool {
        match project_id {
            Some(project) if !self.project_ids.is_empty() => {
                self.project_ids.iter().any(|p| p == project)
            }
            _ => true,
        }
    }

    /// Whether the parent's answer reveals this question.
    ///
    /// Top-level questions are always revealed. A follow-up without a trigger
    /// value is revealed by any answer to its parent.
    pub fn is_triggered_by(&self, answers: &AnswerSet) -> bool {
        let Some(parent_id) = &self.parent_id else {
            return true;
        };
        match (answers.get(parent_id), &self.trigger_value) {
            (Some(answer), Some(trigger)) => answer.matches(trigger),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
