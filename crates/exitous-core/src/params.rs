//! Parameter structures for guidance operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde. Interface layers wrap them with their own
//! derives and convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates arrive as ISO `YYYY-MM-DD` text and are checked when the parameters
//! are turned into engine inputs, so a bad date is reported against the field
//! that carried it.

use std::collections::BTreeMap;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GuidanceError, Result},
    models::{AnswerSet, AnswerValue},
};

/// Parameters for importing a catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportCatalog {
    /// Path to a JSON catalog document
    pub path: String,
}

/// Parameters selecting master content or one company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompanyScope {
    /// Company id; omit for master content only
    #[serde(default)]
    pub company_id: Option<String>,
}

/// A user's answers as they arrive over an interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AnswersInput {
    /// Answers keyed by question id; multi-answer questions take a list
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,
    /// Birth year from the profile form
    #[serde(default)]
    pub birth_year: Option<i16>,
    /// Employment start date (YYYY-MM-DD)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Final employment date (YYYY-MM-DD)
    #[serde(default)]
    pub final_date: Option<String>,
}

impl AnswersInput {
    /// Converts into an engine answer set, checking the dates.
    pub fn to_answer_set(&self) -> Result<AnswerSet> {
        Ok(AnswerSet {
            answers: self.answers.clone(),
            birth_year: self.birth_year,
            start_date: parse_date("start_date", self.start_date.as_deref())?,
            final_date: parse_date("final_date", self.final_date.as_deref())?,
        })
    }
}

/// Parameters for listing a company's questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListQuestions {
    /// Company id; omit for the master catalog
    #[serde(default)]
    pub company_id: Option<String>,
    /// Include deactivated questions
    #[serde(default)]
    pub include_inactive: bool,
    /// Restrict project-scoped questions to this project
    #[serde(default)]
    pub project_id: Option<String>,
    /// When given, list only the questions visible for these answers
    #[serde(default)]
    pub answers: Option<AnswersInput>,
}

/// Parameters for resolving guidance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolveGuidance {
    /// Company id; omit to resolve against master content only
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(flatten)]
    pub answers: AnswersInput,
    /// Reference date for age computation (YYYY-MM-DD); defaults to today
    #[serde(default)]
    pub as_of: Option<String>,
    /// Also match external resources to the resolved tasks
    #[serde(default)]
    pub include_resources: bool,
}

impl ResolveGuidance {
    /// The reference date, defaulting to today in the system time zone.
    pub fn as_of_date(&self) -> Result<Date> {
        match parse_date("as_of", self.as_of.as_deref())? {
            Some(date) => Ok(date),
            None => Ok(jiff::Zoned::now().date()),
        }
    }
}

/// Parameters addressing one library task or tip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContentId {
    /// Company owning the item; omit for master content
    #[serde(default)]
    pub company_id: Option<String>,
    /// Task or tip id
    pub id: String,
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    value
        .parse::<Date>()
        .map(Some)
        .map_err(|e| GuidanceError::invalid_input(field).with_reason(e.to_string()))
}
