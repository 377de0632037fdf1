//! User answers collected against the merged question set.

use std::collections::BTreeMap;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Answer key consulted for the birth year when the raw field is absent.
pub const BIRTH_YEAR_KEY: &str = "birthYear";
/// Answer key consulted for the employment start date.
pub const START_DATE_KEY: &str = "startDate";
/// Answer key consulted for the final employment date.
pub const FINAL_DATE_KEY: &str = "finalDate";

/// A single answer: one value, or the selections of a multi-answer question.
///
/// Date answers are carried as ISO `YYYY-MM-DD` text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// Whether this answer selects `target`.
    ///
    /// Multi-answer values match when they contain the target.
    pub fn matches(&self, target: &str) -> bool {
        match self {
            AnswerValue::Single(value) => value == target,
            AnswerValue::Multiple(values) => values.iter().any(|v| v == target),
        }
    }

    /// Blank text and empty selections count as unanswered.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Single(value) => !value.trim().is_empty(),
            AnswerValue::Multiple(values) => !values.is_empty(),
        }
    }

    /// The single text value, if this is not a multi-answer.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(value) => Some(value),
            AnswerValue::Multiple(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Multiple(values.into_iter().map(String::from).collect())
    }
}

/// A user's full answer set (profile and assessment) plus the raw inputs for
/// computed attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    /// Answers keyed by question id
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,

    /// Birth year from the profile form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i16>,

    /// Employment start date from the assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Final employment date from the assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_date: Option<Date>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer, replacing any previous answer to the same question.
    pub fn with_answer(mut self, question_id: &str, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(question_id.to_string(), value.into());
        self
    }

    pub fn with_birth_year(mut self, year: i16) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn with_employment(mut self, start: Date, end: Date) -> Self {
        self.start_date = Some(start);
        self.final_date = Some(end);
        self
    }

    /// The answer to a question, if it was actually answered.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id).filter(|a| a.is_answered())
    }

    /// Whether the question has a non-blank answer.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// Birth year, falling back to the `birthYear` answer.
    pub fn birth_year(&self) -> Option<i16> {
        self.birth_year.or_else(|| {
            self.get(BIRTH_YEAR_KEY)
                .and_then(AnswerValue::as_single)
                .and_then(|v| v.trim().parse().ok())
        })
    }

    /// Employment start date, falling back to the `startDate` answer.
    pub fn start_date(&self) -> Option<Date> {
        self.start_date.or_else(|| self.date_answer(START_DATE_KEY))
    }

    /// Final employment date, falling back to the `finalDate` answer.
    pub fn final_date(&self) -> Option<Date> {
        self.final_date.or_else(|| self.date_answer(FINAL_DATE_KEY))
    }

    fn date_answer(&self, key: &str) -> Option<Date> {
        self.get(key)
            .and_then(AnswerValue::as_single)
            .and_then(|v| v.trim().parse().ok())
    }
}
