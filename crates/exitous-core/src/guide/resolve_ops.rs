//! Guidance resolution and rule validation.

use log::debug;

use super::Guide;
use crate::{
    display::{GuidanceReport, ValidationReport},
    error::Result,
    params::{CompanyScope, ResolveGuidance},
};

impl Guide {
    /// Resolves a user's answers into ranked tasks and tips.
    ///
    /// The snapshot is loaded once and the engine runs against it, so
    /// concurrent catalog changes never show up half-applied in a result.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::InvalidInput` for malformed dates and
    /// `GuidanceError::CompanyNotFound` for an unknown company. Rule problems
    /// never fail a resolution.
    pub async fn resolve(&self, params: &ResolveGuidance) -> Result<GuidanceReport> {
        let answers = params.answers.to_answer_set()?;
        let as_of = params.as_of_date()?;
        let snapshot = self
            .snapshot(&CompanyScope {
                company_id: params.company_id.clone(),
            })
            .await?;

        debug!(
            "Resolving {} answers for {:?} as of {as_of}",
            answers.answers.len(),
            params.company_id
        );
        let resolution = snapshot.resolve(&answers, as_of);
        let resources = params
            .include_resources
            .then(|| snapshot.resources_for(&resolution));

        Ok(GuidanceReport {
            company_id: params.company_id.clone(),
            as_of,
            resolution,
            resources,
        })
    }

    /// Checks the rule pool of master content or one company.
    pub async fn validate_rules(&self, params: &CompanyScope) -> Result<ValidationReport> {
        let snapshot = self.snapshot(params).await?;
        Ok(ValidationReport {
            company_id: params.company_id.clone(),
            rule_count: snapshot.rules.len(),
            issues: snapshot.validate(),
        })
    }
}
