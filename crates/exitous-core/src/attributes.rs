//! Computed attributes derived from raw answers.
//!
//! Guidance rules may key off the user's age or tenure instead of a direct
//! answer. Both are "unknown" (`None`) when their inputs are missing or
//! inconsistent, and conditions against an unknown attribute never match.

use jiff::{civil::Date, Unit};
use serde::{Deserialize, Serialize};

use crate::models::{AnswerSet, Condition};

/// Employment duration broken into whole years, months and days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Tenure {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Tenure {
    /// Total duration in whole years, the view tenure conditions compare.
    pub fn whole_years(&self) -> i64 {
        i64::from(self.years)
    }
}

/// Age in whole years as of `as_of`.
///
/// Only the birth year is collected, so the age is the difference of calendar
/// years. Returns `None` when the birth year is absent or after `as_of`.
pub fn compute_age(birth_year: Option<i16>, as_of: Date) -> Option<i64> {
    let birth_year = birth_year?;
    let age = i64::from(as_of.year()) - i64::from(birth_year);
    (age >= 0).then_some(age)
}

/// Employment duration between `start` and `end`.
///
/// Returns `None` when either date is missing or `end` precedes `start`.
pub fn compute_tenure(start: Option<Date>, end: Option<Date>) -> Option<Tenure> {
    let (start, end) = (start?, end?);
    if end < start {
        return None;
    }
    let span = start.until((Unit::Year, end)).ok()?;
    Some(Tenure {
        years: u32::try_from(span.get_years()).ok()?,
        months: u32::try_from(span.get_months()).ok()?,
        days: u32::try_from(span.get_days()).ok()?,
    })
}

/// Computed attributes for one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedAttributes {
    pub age: Option<i64>,
    pub tenure: Option<Tenure>,
}

impl ComputedAttributes {
    /// Derives age and tenure from an answer set.
    pub fn from_answers(answers: &AnswerSet, as_of: Date) -> Self {
        Self {
            age: compute_age(answers.birth_year(), as_of),
            tenure: compute_tenure(answers.start_date(), answers.final_date()),
        }
    }

    /// Evaluates a computed condition. Direct and unsupported conditions are
    /// not computed and never match here.
    pub fn matches(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Age(numeric) => numeric.matches(self.age),
            Condition::Tenure(numeric) => numeric.matches(self.tenure.map(|t| t.whole_years())),
            Condition::Direct { .. } | Condition::Unsupported => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{NumericCondition, Operator};

    #[test]
    fn test_compute_age_whole_years() {
        assert_eq!(compute_age(Some(1980), date(2024, 6, 1)), Some(44));
        assert_eq!(compute_age(Some(2024), date(2024, 6, 1)), Some(0));
    }

    #[test]
    fn test_compute_age_unknown() {
        assert_eq!(compute_age(None, date(2024, 6, 1)), None);
        assert_eq!(compute_age(Some(2030), date(2024, 6, 1)), None);
    }

    #[test]
    fn test_compute_tenure_breakdown() {
        let tenure = compute_tenure(Some(date(2019, 3, 15)), Some(date(2024, 5, 20))).unwrap();
        assert_eq!(
            tenure,
            Tenure {
                years: 5,
                months: 2,
                days: 5
            }
        );
        assert_eq!(tenure.whole_years(), 5);
    }

    #[test]
    fn test_compute_tenure_truncates_partial_years() {
        let tenure = compute_tenure(Some(date(2021, 9, 1)), Some(date(2024, 8, 31))).unwrap();
        assert_eq!(tenure.whole_years(), 2);
    }

    #[test]
    fn test_compute_tenure_unknown() {
        assert_eq!(compute_tenure(None, Some(date(2024, 1, 1))), None);
        assert_eq!(compute_tenure(Some(date(2024, 1, 1)), None), None);
        assert_eq!(
            compute_tenure(Some(date(2024, 1, 2)), Some(date(2024, 1, 1))),
            None
        );
    }

    #[test]
    fn test_operator_semantics() {
        let lt = NumericCondition::new(Operator::Lt, vec![40], "Under 40");
        assert!(lt.matches(Some(39)));
        assert!(!lt.matches(Some(40)));

        let gte = NumericCondition::new(Operator::Gte, vec![40], "40 and over");
        assert!(gte.matches(Some(40)));
        assert!(!gte.matches(Some(39)));

        let range = NumericCondition::new(Operator::GteLt, vec![1, 3], "1-3 years");
        assert!(!range.matches(Some(0)));
        assert!(range.matches(Some(1)));
        assert!(range.matches(Some(2)));
        assert!(!range.matches(Some(3)));
    }

    #[test]
    fn test_malformed_bounds_never_match() {
        let missing_upper = NumericCondition::new(Operator::GteLt, vec![1], "broken");
        assert!(!missing_upper.is_well_formed());
        assert!(!missing_upper.matches(Some(2)));

        let extra = NumericCondition::new(Operator::Lt, vec![1, 2], "broken");
        assert!(!extra.matches(Some(0)));

        let unknown = NumericCondition::new(Operator::Unknown, vec![1], "broken");
        assert!(!unknown.matches(Some(5)));
    }

    #[test]
    fn test_unknown_tenure_never_matches() {
        let answers = AnswerSet::new().with_birth_year(1980);
        let attributes = ComputedAttributes::from_answers(&answers, date(2024, 1, 1));
        let condition = Condition::Tenure(NumericCondition::new(Operator::GteLt, vec![1, 3], ""));
        assert!(!attributes.matches(&condition));
    }

    #[test]
    fn test_attributes_read_answer_fallbacks() {
        let answers = AnswerSet::new()
            .with_answer("birthYear", "1990")
            .with_answer("startDate", "2020-01-01")
            .with_answer("finalDate", "2023-06-30");
        let attributes = ComputedAttributes::from_answers(&answers, date(2024, 1, 1));
        assert_eq!(attributes.age, Some(34));
        assert_eq!(attributes.tenure.map(|t| t.years), Some(3));
    }
}
