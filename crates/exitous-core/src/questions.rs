//! Effective question list for a company.
//!
//! Merges the master catalog with a company's overrides and custom questions
//! and orders the result by section.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{AnswerSet, Question};

/// A company's merged question set, ordered by section.
///
/// Keeps inactive questions: answers given while a question was active stay
/// valid for rule evaluation after it is deactivated. Use [`Self::active`]
/// for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MergedCatalog(pub Vec<Question>);

impl MergedCatalog {
    /// Every merged question, including inactive ones.
    pub fn all(&self) -> &[Question] {
        &self.0
    }

    /// Questions to render, inactive ones excluded.
    pub fn active(&self) -> Vec<&Question> {
        self.0.iter().filter(|q| q.is_active).collect()
    }

    /// Active questions a user should currently see.
    ///
    /// Follow-ups appear only when their parent is visible and answered with
    /// the trigger value; project-scoped questions only within their projects.
    pub fn visible(&self, answers: &AnswerSet, project_id: Option<&str>) -> Vec<&Question> {
        let mut shown: HashSet<&str> = HashSet::new();
        let mut visible = Vec::new();

        // Parents may follow their children in section order, so resolve
        // visibility until it settles.
        let mut changed = true;
        while changed {
            changed = false;
            for question in self.0.iter().filter(|q| q.is_active) {
                if shown.contains(question.id.as_str()) || !question.in_project(project_id) {
                    continue;
                }
                let parent_shown = question
                    .parent_id
                    .as_deref()
                    .map_or(true, |parent| shown.contains(parent));
                if parent_shown && question.is_triggered_by(answers) {
                    shown.insert(question.id.as_str());
                    changed = true;
                }
            }
        }

        for question in &self.0 {
            if shown.contains(question.id.as_str()) {
                visible.push(question);
            }
        }
        visible
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.0.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the effective question list for a company.
///
/// - Overrides replace the master question with the same id wholesale and
///   keep its position; overrides without a master counterpart are ignored.
/// - Custom questions are appended at the end of their section; a custom
///   question reusing an existing id is ignored.
/// - Sections listed in `section_order` come first, in that order, followed
///   by the remaining sections in the order they first appear.
pub fn resolve_questions(
    master: &[Question],
    overrides: &[Question],
    custom: &[Question],
    section_order: &[String],
) -> MergedCatalog {
    let mut merged: Vec<Question> = master
        .iter()
        .map(|question| {
            overrides
                .iter()
                .find(|o| o.id == question.id)
                .unwrap_or(question)
                .clone()
        })
        .collect();

    for stray in overrides.iter().filter(|o| !master.iter().any(|m| m.id == o.id)) {
        debug!("Ignoring override for unknown question '{}'", stray.id);
    }

    let mut ids: HashSet<String> = merged.iter().map(|q| q.id.clone()).collect();
    for question in custom {
        if ids.insert(question.id.clone()) {
            merged.push(question.clone());
        } else {
            debug!("Ignoring custom question with duplicate id '{}'", question.id);
        }
    }

    let mut sections: Vec<&str> = Vec::new();
    let declared = section_order.iter().map(String::as_str);
    for section in declared.chain(merged.iter().map(|q| q.section.as_str())) {
        if !sections.contains(&section) {
            sections.push(section);
        }
    }

    // Within a section the merged order already puts master positions first
    // and custom questions after them.
    let mut ordered = Vec::with_capacity(merged.len());
    for section in sections {
        ordered.extend(merged.iter().filter(|q| q.section == section).cloned());
    }

    MergedCatalog(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormType, QuestionType};

    fn question(id: &str, section: &str) -> Question {
        Question {
            id: id.to_string(),
            label: format!("Question {id}"),
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

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id.clone()).collect()
    }

    #[test]
    fn test_sections_follow_declared_then_catalog_order() {
        let master = vec![
            question("a", "Personal"),
            question("b", "Benefits"),
            question("c", "Personal"),
            question("d", "Finances"),
        ];
        let merged = resolve_questions(&master, &[], &[], &["Benefits".to_string()]);
        let all: Vec<&Question> = merged.all().iter().collect();
        assert_eq!(ids(&all), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_repeated_section_order_entry_lists_questions_once() {
        let master = vec![question("a", "Benefits"), question("b", "Personal")];
        let order = ["Benefits".to_string(), "Benefits".to_string()];
        let merged = resolve_questions(&master, &[], &[], &order);
        let all: Vec<&Question> = merged.all().iter().collect();
        assert_eq!(ids(&all), ["a", "b"]);
    }

    #[test]
    fn test_override_replaces_whole_question_in_place() {
        let master = vec![question("a", "Personal"), question("b", "Personal")];
        let mut replacement = question("a", "Personal");
        replacement.label = "Company wording".to_string();
        replacement.options = vec![];

        let merged = resolve_questions(&master, &[replacement], &[], &[]);
        assert_eq!(merged.all()[0].label, "Company wording");
        assert!(merged.all()[0].options.is_empty());
        assert_eq!(merged.all()[1].id, "b");
    }

    #[test]
    fn test_unknown_override_is_ignored() {
        let master = vec![question("a", "Personal")];
        let merged = resolve_questions(&master, &[question("zzz", "Personal")], &[], &[]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_custom_questions_append_within_section() {
        let master = vec![question("a", "Personal"), question("b", "Benefits")];
        let custom = vec![
            question("x", "Personal"),
            question("y", "Company"),
            question("a", "Personal"),
        ];
        let merged = resolve_questions(&master, &[], &custom, &[]);
        let all: Vec<&Question> = merged.all().iter().collect();
        assert_eq!(ids(&all), ["a", "x", "b", "y"]);
    }

    #[test]
    fn test_inactive_questions_kept_for_evaluation_only() {
        let master = vec![question("a", "Personal"), question("b", "Personal")];
        let mut deactivated = question("b", "Personal");
        deactivated.is_active = false;

        let merged = resolve_questions(&master, &[deactivated], &[], &[]);
        assert_eq!(merged.len(), 2);
        assert_eq!(ids(&merged.active()), ["a"]);
        assert!(merged.get("b").is_some());
    }

    #[test]
    fn test_follow_up_visible_only_on_trigger_value() {
        let mut follow_up = question("insuranceType", "Benefits");
        follow_up.parent_id = Some("hadInsurance".to_string());
        follow_up.trigger_value = Some("Yes".to_string());
        let mut nested = question("insuranceProvider", "Benefits");
        nested.parent_id = Some("insuranceType".to_string());
        nested.trigger_value = Some("Yes".to_string());

        let merged = resolve_questions(
            &[nested, follow_up, question("hadInsurance", "Benefits")],
            &[],
            &[],
            &[],
        );

        let hidden = merged.visible(&AnswerSet::new().with_answer("hadInsurance", "No"), None);
        assert_eq!(ids(&hidden), ["hadInsurance"]);

        let shown = merged.visible(
            &AnswerSet::new()
                .with_answer("hadInsurance", "Yes")
                .with_answer("insuranceType", "Yes"),
            None,
        );
        assert_eq!(
            ids(&shown),
            ["insuranceProvider", "insuranceType", "hadInsurance"]
        );

        // A follow-up of a hidden parent stays hidden even if answered.
        let orphan = merged.visible(
            &AnswerSet::new()
                .with_answer("hadInsurance", "No")
                .with_answer("insuranceType", "Yes"),
            None,
        );
        assert_eq!(ids(&orphan), ["hadInsurance"]);
    }

    #[test]
    fn test_project_scoping() {
        let mut scoped = question("equity", "Finances");
        scoped.project_ids = vec!["reorg-2024".to_string()];
        let merged = resolve_questions(&[question("a", "Finances"), scoped], &[], &[], &[]);

        let answers = AnswerSet::new();
        assert_eq!(ids(&merged.visible(&answers, Some("other"))), ["a"]);
        assert_eq!(
            ids(&merged.visible(&answers, Some("reorg-2024"))),
            ["a", "equity"]
        );
        assert_eq!(ids(&merged.visible(&answers, None)), ["a", "equity"]);
    }
}
