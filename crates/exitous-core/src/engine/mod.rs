//! Guidance resolution engine.
//!
//! Turns a user's answers into a ranked, deduplicated set of tasks and tips:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Evaluation    │    │  Accumulation   │    │   Resolution    │
//! │ (explicit and   │───▶│ (dedup task/tip │───▶│ (library lookup,│
//! │  catch-all)     │    │  ids by rule)   │    │  rank, drop     │
//! └─────────────────┘    └─────────────────┘    │  archived)      │
//!                                               └─────────────────┘
//! ```
//!
//! The engine is pure: the same catalog, rules, library, answers and `as_of`
//! date always produce the same output, in the same order. Malformed rules and
//! dangling references are skipped, never reported as errors; use
//! [`crate::validation`] to surface them at authoring time.
//!
//! # Example
//!
//! ```rust
//! use exitous_core::{
//!     engine::resolve_guidance,
//!     library::Library,
//!     models::{AnswerSet, Condition, GuidanceRule, RuleKind},
//! };
//! use jiff::civil::date;
//!
//! let rules = vec![
//!     GuidanceRule::new("r1", "hadMedicalInsurance", RuleKind::Direct)
//!         .with_condition(Condition::answer("hadMedicalInsurance", "Yes"))
//!         .with_tasks(&["review-cobra"]),
//! ];
//! let answers = AnswerSet::new().with_answer("hadMedicalInsurance", "Yes");
//!
//! // Nothing resolves against an empty catalog and library.
//! let resolution = resolve_guidance(&[], &rules, &Library::default(), &answers, date(2024, 5, 1));
//! assert!(resolution.is_empty());
//! ```

mod evaluation;
mod ranking;


use jiff::civil::Date;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    attributes::ComputedAttributes,
    library::Library,
    models::{AnswerSet, GuidanceRule, MasterTask, MasterTip, Question},
};

/// A task selected for the user, with the rules that selected it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTask {
    #[serde(flatten)]
    pub task: MasterTask,
    pub triggered_by: Vec<String>,
}

/// A tip selected for the user, with the rules that selected it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTip {
    #[serde(flatten)]
    pub tip: MasterTip,
    pub triggered_by: Vec<String>,
}

/// Ranked, deduplicated guidance for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResolution {
    pub tasks: Vec<ResolvedTask>,
    pub tips: Vec<ResolvedTip>,

    /// Ids of the rules that fired, in rule order
    pub fired_rules: Vec<String>,
}

impl GuidanceResolution {
    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.tips.is_empty()
    }

    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|r| r.task.id.as_str()).collect()
    }

    pub fn tip_ids(&self) -> Vec<&str> {
        self.tips.iter().map(|r| r.tip.id.as_str()).collect()
    }
}

/// Resolves a user's answers into ranked tasks and tips.
///
/// - `catalog`: the evaluation catalog, including inactive questions. Direct
///   conditions on questions outside it never match.
/// - `rules`: master and company rules as one pool.
/// - `library`: merged task/tip library; its order breaks priority ties.
/// - `as_of`: reference date for age computation.
pub fn resolve_guidance(
    catalog: &[Question],
    rules: &[GuidanceRule],
    library: &Library,
    answers: &AnswerSet,
    as_of: Date,
) -> GuidanceResolution {
    let attributes = ComputedAttributes::from_answers(answers, as_of);
    debug!(
        "Resolving guidance with {} rules (age: {:?}, tenure: {:?})",
        rules.len(),
        attributes.age,
        attributes.tenure
    );

    let fired = evaluation::fired_rules(catalog, rules, answers, &attributes);

    GuidanceResolution {
        tasks: ranking::rank_tasks(&fired, library),
        tips: ranking::rank_tips(&fired, library),
        fired_rules: fired.iter().map(|r| r.id.clone()).collect(),
    }
}
