//! Catalog documents and immutable guidance snapshots.
//!
//! A [`CatalogDocument`] is the import/export shape of the whole platform
//! configuration. A [`GuidanceSnapshot`] is what one resolution call sees:
//! the master content merged with a single company's configuration.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    engine::{resolve_guidance, GuidanceResolution},
    library::Library,
    models::{
        AnswerSet, CompanyAssignment, CompanyConfig, ExternalResource, GuidanceRule, MasterTask,
        MasterTip, Question, SubscriptionTier,
    },
    questions::{resolve_questions, MergedCatalog},
    resources::match_resources,
    validation::{validate_rules, RuleIssue},
};

/// Platform-owned master content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasterCatalog {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub tasks: Vec<MasterTask>,
    #[serde(default)]
    pub tips: Vec<MasterTip>,
    #[serde(default)]
    pub rules: Vec<GuidanceRule>,
    #[serde(default)]
    pub resources: Vec<ExternalResource>,
}

/// A company and its configuration as they appear in a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDocument {
    #[serde(flatten)]
    pub company: CompanyAssignment,
    #[serde(default)]
    pub config: CompanyConfig,
}

impl CompanyDocument {
    /// Stamps the company id onto the configuration and its owned content.
    pub fn normalized(mut self) -> Self {
        let id = self.company.id.clone();
        self.config.company_id = id.clone();
        for rule in &mut self.config.rules {
            rule.company_id = Some(id.clone());
        }
        for task in &mut self.config.custom_tasks {
            task.company_id = Some(id.clone());
        }
        for tip in &mut self.config.custom_tips {
            tip.company_id = Some(id.clone());
            tip.is_company_specific = true;
        }
        self
    }
}

/// Import/export document for the whole platform configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(flatten)]
    pub master: MasterCatalog,
    #[serde(default)]
    pub companies: Vec<CompanyDocument>,
}

/// Everything a resolution call reads, frozen for the duration of the call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceSnapshot {
    /// Company the snapshot was built for; `None` for master content only
    pub company: Option<CompanyAssignment>,
    pub catalog: MergedCatalog,
    pub rules: Vec<GuidanceRule>,
    pub library: Library,
    pub resources: Vec<ExternalResource>,
}

impl GuidanceSnapshot {
    /// Merges master content with an optional company configuration.
    ///
    /// Master rules come first in the rule pool, followed by company rules.
    pub fn build(master: MasterCatalog, company: Option<CompanyDocument>) -> Self {
        let MasterCatalog {
            questions,
            tasks,
            tips,
            rules,
            resources,
        } = master;

        let Some(document) = company.map(CompanyDocument::normalized) else {
            return Self {
                company: None,
                catalog: resolve_questions(&questions, &[], &[], &[]),
                rules,
                library: Library::new(tasks, tips),
                resources,
            };
        };

        let CompanyDocument { company, config } = document;
        let catalog = resolve_questions(
            &questions,
            &config.question_overrides,
            &config.custom_questions,
            &config.section_order,
        );
        let mut pool = rules;
        pool.extend(config.rules);

        Self {
            company: Some(company),
            catalog,
            rules: pool,
            library: Library::merged(tasks, tips, config.custom_tasks, config.custom_tips),
            resources,
        }
    }

    /// Subscription tier of the snapshot's company; master-only snapshots see
    /// basic resources.
    pub fn tier(&self) -> SubscriptionTier {
        self.company.as_ref().map(|c| c.tier).unwrap_or_default()
    }

    /// Resolves guidance for one user against this snapshot.
    pub fn resolve(&self, answers: &AnswerSet, as_of: Date) -> GuidanceResolution {
        resolve_guidance(
            self.catalog.all(),
            &self.rules,
            &self.library,
            answers,
            as_of,
        )
    }

    /// Resources for the resolved tasks, gated by the company tier.
    pub fn resources_for(&self, resolution: &GuidanceResolution) -> Vec<ExternalResource> {
        match_resources(&resolution.tasks, &self.resources, self.tier())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Authoring-time findings for this snapshot's rule pool.
    pub fn validate(&self) -> Vec<RuleIssue> {
        validate_rules(&self.rules, self.catalog.all(), &self.library)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const DOCUMENT: &str = r#"{
        "questions": [
            { "id": "hadMedicalInsurance", "label": "Did you have medical insurance?",
              "section": "Benefits", "type": "radio", "options": ["Yes", "No", "Unsure"],
              "formType": "assessment" },
            { "id": "relocating", "label": "Are you relocating?", "section": "Personal",
              "type": "radio", "options": ["Yes", "No"], "formType": "profile" }
        ],
        "tasks": [
            { "id": "review-cobra", "name": "Review COBRA options", "priority": "High",
              "relatedResourceIds": ["benefits-advisor"] }
        ],
        "tips": [
            { "id": "tip-insurance-info", "text": "Check marketplace plans", "type": "layoff" }
        ],
        "rules": [
            { "id": "R1", "questionId": "hadMedicalInsurance", "type": "direct",
              "conditions": [{ "type": "direct", "questionId": "hadMedicalInsurance", "answer": "Yes" }],
              "taskIds": ["review-cobra"] }
        ],
        "resources": [
            { "id": "benefits-advisor", "name": "Benefits advisor", "tier": "pro" }
        ],
        "companies": [
            { "id": "acme", "name": "Acme Corp", "tier": "pro", "maxUsers": 250,
              "config": {
                "sectionOrder": ["Personal"],
                "customTasks": [{ "id": "acme-hr-call", "name": "Call Acme HR", "priority": "Medium" }],
                "rules": [
                  { "id": "acme-R1", "questionId": "hadMedicalInsurance", "type": "direct",
                    "conditions": [{ "type": "direct", "questionId": "hadMedicalInsurance", "answer": "Yes" }],
                    "taskIds": ["acme-hr-call"] }
                ]
              } }
        ]
    }"#;

    #[test]
    fn test_company_snapshot_merges_everything() {
        let document: CatalogDocument = serde_json::from_str(DOCUMENT).unwrap();
        let company = document.companies[0].clone();
        let snapshot = GuidanceSnapshot::build(document.master, Some(company));

        assert_eq!(snapshot.tier(), SubscriptionTier::Pro);
        assert_eq!(snapshot.catalog.all()[0].id, "relocating");
        assert_eq!(snapshot.rules.len(), 2);
        assert_eq!(snapshot.rules[1].company_id.as_deref(), Some("acme"));

        let answers = AnswerSet::new().with_answer("hadMedicalInsurance", "Yes");
        let resolution = snapshot.resolve(&answers, date(2024, 5, 1));
        assert_eq!(resolution.task_ids(), ["review-cobra", "acme-hr-call"]);

        let resources = snapshot.resources_for(&resolution);
        assert_eq!(resources.len(), 1);
        assert!(snapshot.validate().is_empty());
    }

    #[test]
    fn test_master_snapshot_is_basic_tier() {
        let document: CatalogDocument = serde_json::from_str(DOCUMENT).unwrap();
        let snapshot = GuidanceSnapshot::build(document.master, None);

        assert_eq!(snapshot.tier(), SubscriptionTier::Basic);
        assert_eq!(snapshot.rules.len(), 1);

        let answers = AnswerSet::new().with_answer("hadMedicalInsurance", "Yes");
        let resolution = snapshot.resolve(&answers, date(2024, 5, 1));
        assert_eq!(resolution.task_ids(), ["review-cobra"]);
        assert!(snapshot.resources_for(&resolution).is_empty());
    }
}
