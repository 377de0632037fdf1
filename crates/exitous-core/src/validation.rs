//! Authoring-time checks for guidance rules.
//!
//! The resolution engine silently skips malformed rules and dangling
//! references. This module reports them so editors can fix the rule set before
//! users are affected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    library::Library,
    models::{Condition, GuidanceRule, NumericCondition, Question, RuleKind},
};

/// What is wrong with a rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum IssueKind {
    NoConditions,
    NoOutcomes,
    DuplicateRuleId,
    UnsupportedCondition,
    UnknownOperator,
    WrongBoundCount { expected: usize, found: usize },
    UnknownQuestion { question_id: String },
    AnswerNotAnOption { question_id: String, answer: String },
    DirectConditionInComputedRule,
    UnknownTask { task_id: String },
    ArchivedTask { task_id: String },
    UnknownTip { tip_id: String },
    ArchivedTip { tip_id: String },
}

/// A finding against a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleIssue {
    pub rule_id: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

/// Checks a rule set against the evaluation catalog and merged library.
///
/// Findings are returned in rule order.
pub fn validate_rules(
    rules: &[GuidanceRule],
    catalog: &[Question],
    library: &Library,
) -> Vec<RuleIssue> {
    let mut issues = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for rule in rules {
        let mut report = |kind: IssueKind| {
            issues.push(RuleIssue {
                rule_id: rule.id.clone(),
                kind,
            });
        };

        if !seen_ids.insert(rule.id.as_str()) {
            report(IssueKind::DuplicateRuleId);
        }
        if rule.conditions.is_empty() {
            report(IssueKind::NoConditions);
        }
        if rule.task_ids.is_empty() && rule.tip_ids.is_empty() {
            report(IssueKind::NoOutcomes);
        }

        for condition in &rule.conditions {
            match condition {
                Condition::Direct {
                    question_id,
                    answer,
                } => {
                    if rule.kind == RuleKind::Computed {
                        report(IssueKind::DirectConditionInComputedRule);
                    }
                    match catalog.iter().find(|q| &q.id == question_id) {
                        None => report(IssueKind::UnknownQuestion {
                            question_id: question_id.clone(),
                        }),
                        Some(question) => {
                            if let Some(answer) = answer {
                                if question.question_type.is_choice()
                                    && !question.options.contains(answer)
                                {
                                    report(IssueKind::AnswerNotAnOption {
                                        question_id: question_id.clone(),
                                        answer: answer.clone(),
                                    });
                                }
                            }
                        }
                    }
                }
                Condition::Age(numeric) | Condition::Tenure(numeric) => {
                    if let Some(kind) = bound_issue(numeric) {
                        report(kind);
                    }
                }
                Condition::Unsupported => report(IssueKind::UnsupportedCondition),
            }
        }

        for task_id in &rule.task_ids {
            match library.task(task_id) {
                None => report(IssueKind::UnknownTask {
                    task_id: task_id.clone(),
                }),
                Some((_, task)) if !task.is_active => report(IssueKind::ArchivedTask {
                    task_id: task_id.clone(),
                }),
                Some(_) => {}
            }
        }
        for tip_id in &rule.tip_ids {
            match library.tip(tip_id) {
                None => report(IssueKind::UnknownTip {
                    tip_id: tip_id.clone(),
                }),
                Some((_, tip)) if !tip.is_active => report(IssueKind::ArchivedTip {
                    tip_id: tip_id.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    issues
}

fn bound_issue(numeric: &NumericCondition) -> Option<IssueKind> {
    match numeric.operator.arity() {
        None => Some(IssueKind::UnknownOperator),
        Some(expected) if expected != numeric.bounds.len() => Some(IssueKind::WrongBoundCount {
            expected,
            found: numeric.bounds.len(),
        }),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FormType, MasterTask, MasterTip, Operator, Priority, QuestionType, TipType,
    };

    fn catalog() -> Vec<Question> {
        vec![Question {
            id: "severance".to_string(),
            label: "Were you offered severance?".to_string(),
            section: "Finances".to_string(),
            question_type: QuestionType::Radio,
            options: vec!["Yes".to_string(), "No".to_string()],
            is_active: true,
            form_type: FormType::Assessment,
            parent_id: None,
            trigger_value: None,
            project_ids: vec![],
        }]
    }

    fn library() -> Library {
        Library::new(
            vec![
                MasterTask {
                    id: "negotiate".to_string(),
                    name: "Negotiate severance".to_string(),
                    description: String::new(),
                    category: "Finances".to_string(),
                    priority: Priority::High,
                    related_resource_ids: vec![],
                    is_active: true,
                    company_id: None,
                },
                MasterTask {
                    id: "retired".to_string(),
                    name: "Old task".to_string(),
                    description: String::new(),
                    category: "Finances".to_string(),
                    priority: Priority::Low,
                    related_resource_ids: vec![],
                    is_active: false,
                    company_id: None,
                },
            ],
            vec![MasterTip {
                id: "breathe".to_string(),
                text: "Take a breath".to_string(),
                category: "Wellbeing".to_string(),
                priority: Priority::Low,
                tip_type: TipType::Anxious,
                is_company_specific: false,
                is_active: true,
                company_id: None,
            }],
        )
    }

    fn kinds(issues: &[RuleIssue]) -> Vec<&IssueKind> {
        issues.iter().map(|i| &i.kind).collect()
    }

    #[test]
    fn test_valid_rules_have_no_issues() {
        let rules = vec![
            GuidanceRule::new("r1", "severance", RuleKind::Direct)
                .with_condition(Condition::answer("severance", "No"))
                .with_tasks(&["negotiate"])
                .with_tips(&["breathe"]),
            GuidanceRule::new("r2", "severance", RuleKind::Direct)
                .with_condition(Condition::catch_all("severance"))
                .with_tips(&["breathe"]),
        ];
        assert!(validate_rules(&rules, &catalog(), &library()).is_empty());
    }

    #[test]
    fn test_reports_reference_problems() {
        let rules = vec![GuidanceRule::new("r1", "severance", RuleKind::Direct)
            .with_condition(Condition::answer("severance", "Maybe"))
            .with_condition(Condition::answer("ghost", "Yes"))
            .with_tasks(&["retired", "missing"])
            .with_tips(&["nope"])];

        let issues = validate_rules(&rules, &catalog(), &library());
        assert_eq!(
            kinds(&issues),
            [
                &IssueKind::AnswerNotAnOption {
                    question_id: "severance".to_string(),
                    answer: "Maybe".to_string()
                },
                &IssueKind::UnknownQuestion {
                    question_id: "ghost".to_string()
                },
                &IssueKind::ArchivedTask {
                    task_id: "retired".to_string()
                },
                &IssueKind::UnknownTask {
                    task_id: "missing".to_string()
                },
                &IssueKind::UnknownTip {
                    tip_id: "nope".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reports_structural_problems() {
        let rules = vec![
            GuidanceRule::new("empty", "severance", RuleKind::Direct),
            GuidanceRule::new("computed", "birthYear", RuleKind::Computed)
                .with_condition(Condition::Age(NumericCondition::new(
                    Operator::GteLt,
                    vec![40],
                    "",
                )))
                .with_condition(Condition::Tenure(NumericCondition::new(
                    Operator::Unknown,
                    vec![1],
                    "",
                )))
                .with_condition(Condition::Unsupported)
                .with_condition(Condition::answer("severance", "Yes"))
                .with_tips(&["breathe"]),
            GuidanceRule::new("computed", "birthYear", RuleKind::Computed)
                .with_condition(Condition::Age(NumericCondition::new(
                    Operator::Gte,
                    vec![40],
                    "",
                )))
                .with_tips(&["breathe"]),
        ];

        let issues = validate_rules(&rules, &catalog(), &library());
        assert_eq!(
            kinds(&issues),
            [
                &IssueKind::NoConditions,
                &IssueKind::NoOutcomes,
                &IssueKind::WrongBoundCount {
                    expected: 2,
                    found: 1
                },
                &IssueKind::UnknownOperator,
                &IssueKind::UnsupportedCondition,
                &IssueKind::DirectConditionInComputedRule,
                &IssueKind::DuplicateRuleId,
            ]
        );
        assert_eq!(issues[0].rule_id, "empty");
        assert_eq!(issues[6].rule_id, "computed");
    }

    #[test]
    fn test_issue_serializes_flat() {
        let issue = RuleIssue {
            rule_id: "r1".to_string(),
            kind: IssueKind::UnknownTask {
                task_id: "t".to_string(),
            },
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ruleId": "r1", "kind": "unknown_task", "taskId": "t" })
        );
    }
}
