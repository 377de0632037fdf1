//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can render it through the terminal renderer
//! and the MCP server can return it as-is.

use std::fmt;

use crate::{
    engine::{ResolvedTask, ResolvedTip},
    models::{
        CompanyAssignment, ExternalResource, FormType, MasterTask, MasterTip, PermissionLevel,
        Priority, Question, QuestionType, SubscriptionTier, TipType,
    },
    validation::{IssueKind, RuleIssue},
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Priority,
    QuestionType,
    FormType,
    TipType,
    SubscriptionTier,
    PermissionLevel,
);

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** `{}` ({})", self.label, self.id, self.question_type)?;
        if !self.options.is_empty() {
            write!(f, ": {}", self.options.join(" / "))?;
        }
        if let (Some(parent), Some(trigger)) = (&self.parent_id, &self.trigger_value) {
            write!(f, " _when {parent} = {trigger}_")?;
        }
        if !self.is_active {
            write!(f, " _(inactive)_")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for MasterTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} `{}`", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if !self.category.is_empty() {
            writeln!(f, "- Category: {}", self.category)?;
        }
        writeln!(f, "- Active: {}", if self.is_active { "yes" } else { "no" })?;
        if let Some(company) = &self.company_id {
            writeln!(f, "- Company: {company}")?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for MasterTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Tip `{}`", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Type: {}", self.tip_type)?;
        writeln!(f, "- Active: {}", if self.is_active { "yes" } else { "no" })?;
        writeln!(f)?;
        writeln!(f, "{}", self.text)
    }
}

impl fmt::Display for ResolvedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        write!(f, "- **[{}]** {}", task.priority, task.name)?;
        if !task.category.is_empty() {
            write!(f, " _({})_", task.category)?;
        }
        writeln!(f)?;
        if !task.description.is_empty() {
            writeln!(f, "  {}", task.description)?;
        }
        writeln!(f, "  Triggered by: {}", self.triggered_by.join(", "))
    }
}

impl fmt::Display for ResolvedTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **[{}]** {}", self.tip.priority, self.tip.text)?;
        writeln!(f, "  Triggered by: {}", self.triggered_by.join(", "))
    }
}

impl fmt::Display for ExternalResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "- [{}]({url})", self.name)?,
            None => write!(f, "- {}", self.name)?,
        }
        if !self.category.is_empty() {
            write!(f, " _({})_", self.category)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CompanyAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} `{}`", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Tier: {}", self.tier)?;
        writeln!(f, "- Seats: {}", self.max_users)?;
        if let Some(days) = self.default_deadline_days {
            writeln!(f, "- Default deadline: {days} days")?;
        }
        for manager in &self.hr_managers {
            writeln!(f, "- HR: {} ({})", manager.email, manager.permission)?;
        }
        Ok(())
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::NoConditions => write!(f, "has no conditions and can never fire"),
            IssueKind::NoOutcomes => write!(f, "selects no tasks or tips"),
            IssueKind::DuplicateRuleId => write!(f, "reuses the id of an earlier rule"),
            IssueKind::UnsupportedCondition => write!(f, "has a condition of unsupported type"),
            IssueKind::UnknownOperator => write!(f, "uses an unknown numeric operator"),
            IssueKind::WrongBoundCount { expected, found } => {
                write!(f, "operator takes {expected} bound(s) but {found} given")
            }
            IssueKind::UnknownQuestion { question_id } => {
                write!(f, "references unknown question `{question_id}`")
            }
            IssueKind::AnswerNotAnOption {
                question_id,
                answer,
            } => write!(f, "expects `{answer}`, which is not an option of `{question_id}`"),
            IssueKind::DirectConditionInComputedRule => {
                write!(f, "mixes a direct condition into a computed rule")
            }
            IssueKind::UnknownTask { task_id } => write!(f, "references unknown task `{task_id}`"),
            IssueKind::ArchivedTask { task_id } => {
                write!(f, "references archived task `{task_id}`")
            }
            IssueKind::UnknownTip { tip_id } => write!(f, "references unknown tip `{tip_id}`"),
            IssueKind::ArchivedTip { tip_id } => write!(f, "references archived tip `{tip_id}`"),
        }
    }
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- `{}` {}", self.rule_id, self.kind)
    }
}
