//! Catalog import and export, company listing and question lists.

use std::path::PathBuf;

use log::info;
use tokio::task;

use super::Guide;
use crate::{
    db::catalog_queries::ImportSummary,
    display::{Companies, QuestionList},
    error::{GuidanceError, Result},
    params::{CompanyScope, ImportCatalog, ListQuestions},
    snapshot::{CatalogDocument, GuidanceSnapshot},
};

impl Guide {
    /// Replaces the stored catalog with the JSON document at `params.path`.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::FileSystem` if the file cannot be read and
    /// `GuidanceError::Serialization` if it is not a catalog document.
    pub async fn import_catalog(&self, params: &ImportCatalog) -> Result<ImportSummary> {
        let path = PathBuf::from(&params.path);
        let document = task::spawn_blocking(move || -> Result<CatalogDocument> {
            let contents =
                std::fs::read_to_string(&path).map_err(|e| GuidanceError::FileSystem {
                    path: path.clone(),
                    source: e,
                })?;
            Ok(serde_json::from_str(&contents)?)
        })
        .await
        .map_err(GuidanceError::join)??;
        self.import_document(document).await
    }

    /// Replaces the stored catalog with an in-memory document.
    pub async fn import_document(&self, document: CatalogDocument) -> Result<ImportSummary> {
        let summary = self
            .with_database(move |db| db.import_catalog(&document))
            .await?;
        info!(
            "Imported {} rules and {} companies",
            summary.rules, summary.companies
        );
        Ok(summary)
    }

    /// The stored catalog in import format.
    pub async fn export_catalog(&self) -> Result<CatalogDocument> {
        self.with_database(|db| db.export_catalog()).await
    }

    /// Companies in import order.
    pub async fn list_companies(&self) -> Result<Companies> {
        self.with_database(|db| db.list_companies())
            .await
            .map(Companies)
    }

    /// Loads the merged view of master content and an optional company.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::CompanyNotFound` for an unknown company.
    pub async fn snapshot(&self, params: &CompanyScope) -> Result<GuidanceSnapshot> {
        let company_id = params.company_id.clone();
        self.with_database(move |db| db.load_snapshot(company_id.as_deref()))
            .await
    }

    /// Lists a company's merged questions in section order.
    ///
    /// With answers, only the questions the user currently sees are listed:
    /// active, in the requested project, and with their parent answered with
    /// the trigger value.
    pub async fn list_questions(&self, params: &ListQuestions) -> Result<QuestionList> {
        let answers = params
            .answers
            .as_ref()
            .map(|a| a.to_answer_set())
            .transpose()?;
        let snapshot = self
            .snapshot(&CompanyScope {
                company_id: params.company_id.clone(),
            })
            .await?;
        let catalog = &snapshot.catalog;
        let project = params.project_id.as_deref();

        let questions = match answers {
            Some(answers) => catalog
                .visible(&answers, project)
                .into_iter()
                .cloned()
                .collect(),
            None => catalog
                .all()
                .iter()
                .filter(|q| params.include_inactive || q.is_active)
                .filter(|q| q.in_project(project))
                .cloned()
                .collect(),
        };
        Ok(QuestionList(questions))
    }
}
