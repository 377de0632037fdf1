//! Guidance rule conditions.
//!
//! Conditions are a tagged union on `type`. Unrecognized condition types and
//! operators still deserialize (as [`Condition::Unsupported`] and
//! [`Operator::Unknown`]) so one malformed rule never prevents a rule set from
//! loading; neither ever matches. A missing or unreadable operator is
//! [`Operator::Unknown`], unreadable bounds are empty, and any other condition
//! that cannot be read is [`Condition::Unsupported`].

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Numeric comparison used by computed-attribute conditions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `value < upper`
    Lt,

    /// `value >= lower`
    Gte,

    /// `lower <= value < upper`
    GteLt,

    #[default]
    #[serde(other)]
    Unknown,
}

impl Operator {
    /// Number of bounds the operator requires, `None` for unknown operators.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Operator::Lt | Operator::Gte => Some(1),
            Operator::GteLt => Some(2),
            Operator::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::GteLt => "gte_lt",
            Operator::Unknown => "unknown",
        }
    }
}

/// A bounded comparison against a computed attribute such as age or tenure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumericCondition {
    #[serde(default, deserialize_with = "lenient_operator")]
    pub operator: Operator,

    /// Bound(s) in whole years; accepts a single number or an array
    #[serde(rename = "value", default, deserialize_with = "one_or_many")]
    pub bounds: Vec<i64>,

    /// Display label such as "Under 40"
    #[serde(default)]
    pub label: String,
}

impl NumericCondition {
    pub fn new(operator: Operator, bounds: Vec<i64>, label: impl Into<String>) -> Self {
        Self {
            operator,
            bounds,
            label: label.into(),
        }
    }

    /// Whether the bounds fit the operator.
    pub fn is_well_formed(&self) -> bool {
        self.operator.arity() == Some(self.bounds.len())
    }

    /// Evaluates the comparison. Unknown values and malformed conditions
    /// never match.
    pub fn matches(&self, value: Option<i64>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match (self.operator, self.bounds.as_slice()) {
            (Operator::Lt, [upper]) => value < *upper,
            (Operator::Gte, [lower]) => value >= *lower,
            (Operator::GteLt, [lower, upper]) => *lower <= value && value < *upper,
            _ => false,
        }
    }
}

/// A single matchable predicate of a guidance rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Condition {
    /// Matches a direct answer; without `answer` it is a catch-all for the
    /// question.
    #[serde(rename_all = "camelCase")]
    Direct {
        question_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer: Option<String>,
    },

    /// Matches the user's age in whole years.
    Age(NumericCondition),

    /// Matches the user's tenure in whole years.
    Tenure(NumericCondition),

    /// Any condition type this version does not understand.
    #[serde(other)]
    Unsupported,
}

impl Condition {
    /// Explicit direct condition.
    pub fn answer(question_id: &str, answer: &str) -> Self {
        Condition::Direct {
            question_id: question_id.to_string(),
            answer: Some(answer.to_string()),
        }
    }

    /// Catch-all direct condition.
    pub fn catch_all(question_id: &str) -> Self {
        Condition::Direct {
            question_id: question_id.to_string(),
            answer: None,
        }
    }
}

/// Reads a rule's condition list, turning unreadable entries into
/// [`Condition::Unsupported`].
pub(crate) fn lenient_conditions<'de, D>(deserializer: D) -> Result<Vec<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                debug!("Unreadable condition treated as unsupported: {e}");
                Condition::Unsupported
            })
        })
        .collect())
}

fn lenient_operator<'de, D>(deserializer: D) -> Result<Operator, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}

/// Accepts a single whole number or an array of them. Anything else reads as
/// no bounds, which no operator accepts.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let bounds = match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .iter()
            .map(Value::as_i64)
            .collect::<Option<Vec<i64>>>()
            .unwrap_or_default(),
        value => value.as_i64().into_iter().collect(),
    };
    Ok(bounds)
}
