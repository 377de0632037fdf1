//! Rule evaluation: which rules fire for an answer set.
//!
//! Evaluation runs in two passes. The first evaluates explicit-answer and
//! computed conditions and records every question that has an explicit match.
//! The second fires catch-all conditions only for answered questions without
//! an explicit match, so catch-all suppression is per question across the
//! whole rule pool.

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    attributes::ComputedAttributes,
    models::{AnswerSet, AnswerValue, Condition, GuidanceRule, Question},
};

/// Answers that rule evaluation may read: answered questions known to the
/// evaluation catalog.
struct AnswerView<'a> {
    known: HashSet<&'a str>,
    answers: &'a AnswerSet,
}

impl<'a> AnswerView<'a> {
    fn new(catalog: &'a [Question], answers: &'a AnswerSet) -> Self {
        Self {
            known: catalog.iter().map(|q| q.id.as_str()).collect(),
            answers,
        }
    }

    fn get(&self, question_id: &str) -> Option<&'a AnswerValue> {
        if !self.known.contains(question_id) {
            return None;
        }
        self.answers.get(question_id)
    }
}

/// Returns the rules that fire, in rule order.
pub(crate) fn fired_rules<'r>(
    catalog: &[Question],
    rules: &'r [GuidanceRule],
    answers: &AnswerSet,
    attributes: &ComputedAttributes,
) -> Vec<&'r GuidanceRule> {
    let view = AnswerView::new(catalog, answers);
    let mut fired = vec![false; rules.len()];
    let mut explicitly_matched: HashSet<&str> = HashSet::new();

    // Every condition is visited so all explicit matches are recorded, even
    // for rules that already fired.
    for (index, rule) in rules.iter().enumerate() {
        for condition in &rule.conditions {
            let matched = match condition {
                Condition::Direct {
                    question_id,
                    answer: Some(target),
                } => {
                    let matched = view.get(question_id).is_some_and(|a| a.matches(target));
                    if matched {
                        explicitly_matched.insert(question_id.as_str());
                    }
                    matched
                }
                Condition::Direct { answer: None, .. } => false,
                Condition::Age(_) | Condition::Tenure(_) => attributes.matches(condition),
                Condition::Unsupported => {
                    debug!("Rule '{}' has an unsupported condition", rule.id);
                    false
                }
            };
            fired[index] |= matched;
        }
    }

    for (index, rule) in rules.iter().enumerate() {
        if fired[index] {
            continue;
        }
        fired[index] = rule.conditions.iter().any(|condition| match condition {
            Condition::Direct {
                question_id,
                answer: None,
            } => {
                view.get(question_id).is_some()
                    && !explicitly_matched.contains(question_id.as_str())
            }
            _ => false,
        });
    }

    let fired: Vec<&GuidanceRule> = rules
        .iter()
        .zip(fired)
        .filter_map(|(rule, fired)| fired.then_some(rule))
        .collect();
    trace!(
        "Fired rules: {:?}",
        fired.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
    );
    fired
}
