//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    db::catalog_queries::ImportSummary,
    engine::GuidanceResolution,
    models::{CompanyAssignment, ExternalResource, Question},
    validation::RuleIssue,
};

/// Guidance resolved for one user, ready to show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceReport {
    /// Company the guidance was resolved for
    pub company_id: Option<String>,
    pub as_of: Date,
    #[serde(flatten)]
    pub resolution: GuidanceResolution,

    /// Matched resources; `None` when not requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ExternalResource>>,
}

impl fmt::Display for GuidanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.company_id {
            Some(company) => writeln!(f, "# Guidance for {company}")?,
            None => writeln!(f, "# Guidance")?,
        }
        writeln!(f)?;
        writeln!(f, "- As of: {}", self.as_of)?;
        writeln!(f, "- Rules fired: {}", self.resolution.fired_rules.len())?;

        if self.resolution.is_empty() {
            writeln!(f, "\nNo guidance matched these answers.")?;
        }

        if !self.resolution.tasks.is_empty() {
            writeln!(f, "\n## Tasks\n")?;
            for task in &self.resolution.tasks {
                write!(f, "{task}")?;
            }
        }
        if !self.resolution.tips.is_empty() {
            writeln!(f, "\n## Tips\n")?;
            for tip in &self.resolution.tips {
                write!(f, "{tip}")?;
            }
        }
        if let Some(resources) = self.resources.as_ref().filter(|r| !r.is_empty()) {
            writeln!(f, "\n## Resources\n")?;
            for resource in resources {
                write!(f, "{resource}")?;
            }
        }
        Ok(())
    }
}

/// Rule findings for master content or one company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub company_id: Option<String>,
    pub rule_count: usize,
    pub issues: Vec<RuleIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.company_id.as_deref().unwrap_or("master content");
        writeln!(f, "# Rule check: {scope}")?;
        writeln!(f)?;
        if self.is_clean() {
            return writeln!(f, "All {} rules are well formed.", self.rule_count);
        }
        writeln!(
            f,
            "{} issue(s) across {} rules:\n",
            self.issues.len(),
            self.rule_count
        )?;
        for issue in &self.issues {
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Questions grouped under section headings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct QuestionList(pub Vec<Question>);

impl fmt::Display for QuestionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No questions found.");
        }
        let mut section: Option<&str> = None;
        for question in &self.0 {
            if section != Some(question.section.as_str()) {
                if section.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {}\n", question.section)?;
                section = Some(question.section.as_str());
            }
            write!(f, "{question}")?;
        }
        Ok(())
    }
}

/// Company listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Companies(pub Vec<CompanyAssignment>);

impl fmt::Display for Companies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No companies found.");
        }
        for (i, company) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{company}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Imported catalog:")?;
        writeln!(f)?;
        writeln!(f, "- Questions: {}", self.questions)?;
        writeln!(f, "- Tasks: {}", self.tasks)?;
        writeln!(f, "- Tips: {}", self.tips)?;
        writeln!(f, "- Rules: {}", self.rules)?;
        writeln!(f, "- Resources: {}", self.resources)?;
        writeln!(f, "- Companies: {}", self.companies)
    }
}

/// Confirmation of an archive or restore.
pub struct ContentStatus<T> {
    pub item: T,
    pub kind: &'static str,
}

impl<T> ContentStatus<T> {
    pub fn new(kind: &'static str, item: T) -> Self {
        Self { item, kind }
    }
}

impl<T: fmt::Display + IsActive> fmt::Display for ContentStatus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.item.is_active() {
            "Restored"
        } else {
            "Archived"
        };
        writeln!(f, "{verb} {}.", self.kind)?;
        writeln!(f)?;
        write!(f, "{}", self.item)
    }
}

/// Content records with an archive flag.
pub trait IsActive {
    fn is_active(&self) -> bool;
}

impl IsActive for crate::models::MasterTask {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl IsActive for crate::models::MasterTip {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        engine::ResolvedTask,
        models::{FormType, MasterTask, Priority, QuestionType},
        validation::IssueKind,
    };

    fn question(id: &str, section: &str) -> Question {
        Question {
            id: id.to_string(),
            label: format!("Label {id}"),
            section: section.to_string(),
            question_type: QuestionType::Radio,
            options: vec!["Yes".to_string(), "No".to_string()],
            is_active: true,
            form_type: FormType::Assessment,
            parent_id: None,
            trigger_value: None,
            project_ids: vec![],
        }
    }

    fn task() -> MasterTask {
        MasterTask {
            id: "review-cobra".to_string(),
            name: "Review COBRA options".to_string(),
            description: String::new(),
            category: "Benefits".to_string(),
            priority: Priority::High,
            related_resource_ids: vec![],
            is_active: true,
            company_id: None,
        }
    }

    #[test]
    fn test_report_lists_tasks_with_triggers() {
        let report = GuidanceReport {
            company_id: Some("acme".to_string()),
            as_of: date(2024, 5, 1),
            resolution: GuidanceResolution {
                tasks: vec![ResolvedTask {
                    task: task(),
                    triggered_by: vec!["R1".to_string()],
                }],
                tips: vec![],
                fired_rules: vec!["R1".to_string()],
            },
            resources: None,
        };

        let output = report.to_string();
        assert!(output.starts_with("# Guidance for acme"));
        assert!(output.contains("- As of: 2024-05-01"));
        assert!(output.contains("## Tasks"));
        assert!(output.contains("**[High]** Review COBRA options"));
        assert!(output.contains("Triggered by: R1"));
        assert!(!output.contains("## Tips"));
    }

    #[test]
    fn test_empty_report() {
        let report = GuidanceReport {
            company_id: None,
            as_of: date(2024, 5, 1),
            resolution: GuidanceResolution::default(),
            resources: Some(vec![]),
        };
        let output = report.to_string();
        assert!(output.contains("No guidance matched"));
        assert!(!output.contains("## Resources"));
    }

    #[test]
    fn test_question_list_groups_sections() {
        let list = QuestionList(vec![
            question("a", "Personal"),
            question("b", "Personal"),
            question("c", "Benefits"),
        ]);
        let output = list.to_string();
        assert_eq!(output.matches("## Personal").count(), 1);
        assert!(output.contains("## Benefits"));
        assert!(output.contains("`c` (radio): Yes / No"));
    }

    #[test]
    fn test_validation_report() {
        let clean = ValidationReport {
            company_id: None,
            rule_count: 3,
            issues: vec![],
        };
        assert!(clean.to_string().contains("All 3 rules are well formed."));

        let dirty = ValidationReport {
            company_id: Some("acme".to_string()),
            rule_count: 3,
            issues: vec![RuleIssue {
                rule_id: "R9".to_string(),
                kind: IssueKind::ArchivedTask {
                    task_id: "old".to_string(),
                },
            }],
        };
        let output = dirty.to_string();
        assert!(output.contains("# Rule check: acme"));
        assert!(output.contains("- `R9` references archived task `old`"));
    }

    #[test]
    fn test_content_status_verb() {
        let mut archived = task();
        archived.is_active = false;
        assert!(ContentStatus::new("task", archived)
            .to_string()
            .starts_with("Archived task."));
        assert!(ContentStatus::new("task", task())
            .to_string()
            .starts_with("Restored task."));
    }
}
