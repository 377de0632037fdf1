//! Data models for the guidance catalog.
//!
//! The records mirror the configuration the web application edits: questions
//! in the master catalog and per-company overrides, guidance rules with their
//! conditions, task/tip libraries and the external resource directory. All of
//! them serialize with camelCase field names so exported configuration loads
//! unchanged.
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use exitous_core::models::{Condition, GuidanceRule, RuleKind};
//!
//! let rule: GuidanceRule = serde_json::from_str(
//!     r#"{
//!         "id": "r1",
//!         "questionId": "hadMedicalInsurance",
//!         "type": "direct",
//!         "conditions": [{ "type": "direct", "questionId": "hadMedicalInsurance", "answer": "Yes" }],
//!         "taskIds": ["review-cobra"]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(rule.kind, RuleKind::Direct);
//! assert_eq!(rule.conditions[0], Condition::answer("hadMedicalInsurance", "Yes"));
//! ```

pub mod answers;
pub mod company;
pub mod condition;
pub mod content;
pub mod kinds;
pub mod question;
pub mod rule;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerValue};
pub use company::{CompanyAssignment, CompanyConfig, HrManager};
pub use condition::{Condition, NumericCondition, Operator};
pub use content::{ExternalResource, MasterTask, MasterTip};
pub use kinds::{FormType, PermissionLevel, Priority, QuestionType, SubscriptionTier, TipType};
pub use question::Question;
pub use rule::{GuidanceRule, RuleKind};
