//! Enumerations shared across questions, rules and content.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

/// Input kind of a question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Select,
    Radio,
    Checkbox,
    Date,
    Text,
}

impl QuestionType {
    /// Whether answers are restricted to the question's options.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionType::Select | QuestionType::Radio | QuestionType::Checkbox
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Select => "select",
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Date => "date",
            QuestionType::Text => "text",
        }
    }
}

/// Form a question belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Collected once when the user sets up their profile
    Profile,

    /// Collected during the exit assessment
    Assessment,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Profile => "profile",
            FormType::Assessment => "assessment",
        }
    }
}

/// Priority of a task or tip.
///
/// Ordering follows presentation order: `High` sorts before `Medium`, which
/// sorts before `Low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Audience of a tip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipType {
    /// Practical advice about the layoff itself
    Layoff,

    /// Reassurance for users who report anxiety
    Anxious,
}

impl TipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipType::Layoff => "layoff",
            TipType::Anxious => "anxious",
        }
    }
}

/// Subscription tier of a company.
///
/// `Pro` includes everything available to `Basic`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Pro,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Pro => "pro",
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(SubscriptionTier::Basic),
            "pro" => Ok(SubscriptionTier::Pro),
            _ => Err(format!("Invalid subscription tier: {s}")),
        }
    }
}

/// Permission level of an HR manager within a company.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// Manages users and all company content
    Admin,

    /// Edits questions, tasks, tips and rules
    Edit,

    /// Read-only access
    View,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Admin => "admin",
            PermissionLevel::Edit => "edit",
            PermissionLevel::View => "view",
        }
    }
}
