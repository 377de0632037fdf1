//! Catalog import, export and snapshot loading.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Params, Transaction};
use serde::{de::DeserializeOwned, Serialize};

use super::{scope_of, MASTER_SCOPE};
use crate::{
    error::{DatabaseResultExt, GuidanceError, Result},
    models::{CompanyAssignment, CompanyConfig, Question},
    snapshot::{CatalogDocument, CompanyDocument, GuidanceSnapshot, MasterCatalog},
};

const CLEAR_SQL: &str = "DELETE FROM questions; DELETE FROM tasks; DELETE FROM tips; \
     DELETE FROM rules; DELETE FROM resources; DELETE FROM companies;";
const INSERT_COMPANY_SQL: &str = "INSERT INTO companies \
     (id, name, assignment, section_order, position, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)";
const INSERT_QUESTION_SQL: &str =
    "INSERT INTO questions (scope, origin, id, position, data) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_TASK_SQL: &str =
    "INSERT INTO tasks (scope, id, position, data, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_TIP_SQL: &str =
    "INSERT INTO tips (scope, id, position, data, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_RULE_SQL: &str =
    "INSERT INTO rules (scope, id, position, data) VALUES (?1, ?2, ?3, ?4)";
const INSERT_RESOURCE_SQL: &str = "INSERT INTO resources (id, position, data) VALUES (?1, ?2, ?3)";

const SELECT_QUESTIONS_SQL: &str =
    "SELECT data FROM questions WHERE scope = ?1 AND origin = ?2 ORDER BY position";
const SELECT_TASKS_SQL: &str = "SELECT data FROM tasks WHERE scope = ?1 ORDER BY position";
const SELECT_TIPS_SQL: &str = "SELECT data FROM tips WHERE scope = ?1 ORDER BY position";
const SELECT_RULES_SQL: &str = "SELECT data FROM rules WHERE scope = ?1 ORDER BY position";
const SELECT_RESOURCES_SQL: &str = "SELECT data FROM resources ORDER BY position";
const SELECT_COMPANY_SQL: &str = "SELECT assignment, section_order FROM companies WHERE id = ?1";
const SELECT_COMPANIES_SQL: &str = "SELECT assignment FROM companies ORDER BY position";

/// Counts of records written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub questions: usize,
    pub tasks: usize,
    pub tips: usize,
    pub rules: usize,
    pub resources: usize,
    pub companies: usize,
}

/// Question origin within a scope.
#[derive(Debug, Clone, Copy)]
enum Origin {
    Master,
    Override,
    Custom,
}

impl Origin {
    fn as_str(self) -> &'static str {
        match self {
            Origin::Master => "master",
            Origin::Override => "override",
            Origin::Custom => "custom",
        }
    }
}

impl super::Database {
    /// Replaces the stored catalog with the given document.
    ///
    /// The import is transactional: on any error the previous catalog is
    /// left untouched.
    pub fn import_catalog(&mut self, document: &CatalogDocument) -> Result<ImportSummary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let now = Timestamp::now().to_string();
        let mut summary = ImportSummary::default();

        tx.execute_batch(CLEAR_SQL)
            .db_context("Failed to clear existing catalog")?;

        let master = &document.master;
        summary.questions +=
            insert_questions(&tx, MASTER_SCOPE, Origin::Master, &master.questions)?;
        summary.tasks += insert_scoped(
            &tx,
            INSERT_TASK_SQL,
            MASTER_SCOPE,
            &now,
            &master.tasks,
            |t| &t.id,
        )?;
        summary.tips +=
            insert_scoped(&tx, INSERT_TIP_SQL, MASTER_SCOPE, &now, &master.tips, |t| &t.id)?;
        summary.rules += insert_rules(&tx, MASTER_SCOPE, &master.rules)?;

        for (position, resource) in master.resources.iter().enumerate() {
            tx.execute(
                INSERT_RESOURCE_SQL,
                params![resource.id, position as i64, serde_json::to_string(resource)?],
            )
            .db_context("Failed to insert resource")?;
        }
        summary.resources = master.resources.len();

        for (position, company) in document.companies.iter().enumerate() {
            let CompanyDocument { company, config } = company.clone().normalized();
            let scope = company.id.as_str();

            tx.execute(
                INSERT_COMPANY_SQL,
                params![
                    company.id,
                    company.name,
                    serde_json::to_string(&company)?,
                    serde_json::to_string(&config.section_order)?,
                    position as i64,
                    now,
                ],
            )
            .db_context("Failed to insert company")?;

            summary.questions +=
                insert_questions(&tx, scope, Origin::Override, &config.question_overrides)?;
            summary.questions +=
                insert_questions(&tx, scope, Origin::Custom, &config.custom_questions)?;
            summary.tasks += insert_scoped(
                &tx,
                INSERT_TASK_SQL,
                scope,
                &now,
                &config.custom_tasks,
                |t| &t.id,
            )?;
            summary.tips += insert_scoped(
                &tx,
                INSERT_TIP_SQL,
                scope,
                &now,
                &config.custom_tips,
                |t| &t.id,
            )?;
            summary.rules += insert_rules(&tx, scope, &config.rules)?;
            summary.companies += 1;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(summary)
    }

    /// Loads the platform master content.
    pub fn load_master(&self) -> Result<MasterCatalog> {
        Ok(MasterCatalog {
            questions: self.load_questions(MASTER_SCOPE, Origin::Master)?,
            tasks: self.load_json(SELECT_TASKS_SQL, params![MASTER_SCOPE], "tasks")?,
            tips: self.load_json(SELECT_TIPS_SQL, params![MASTER_SCOPE], "tips")?,
            rules: self.load_json(SELECT_RULES_SQL, params![MASTER_SCOPE], "rules")?,
            resources: self.load_json(SELECT_RESOURCES_SQL, [], "resources")?,
        })
    }

    /// Loads a company and its configuration, if it exists.
    pub fn load_company(&self, company_id: &str) -> Result<Option<CompanyDocument>> {
        let row = self
            .connection
            .query_row(SELECT_COMPANY_SQL, params![company_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .optional()
            .db_context("Failed to query company")?;

        let Some((assignment, section_order)) = row else {
            return Ok(None);
        };
        let company: CompanyAssignment = serde_json::from_str(&assignment)?;
        let scope = scope_of(Some(company_id));

        let config = CompanyConfig {
            company_id: company_id.to_string(),
            section_order: serde_json::from_str(&section_order)?,
            question_overrides: self.load_questions(scope, Origin::Override)?,
            custom_questions: self.load_questions(scope, Origin::Custom)?,
            custom_tasks: self.load_json(SELECT_TASKS_SQL, params![scope], "tasks")?,
            custom_tips: self.load_json(SELECT_TIPS_SQL, params![scope], "tips")?,
            rules: self.load_json(SELECT_RULES_SQL, params![scope], "rules")?,
        };

        Ok(Some(CompanyDocument { company, config }))
    }

    /// Builds the snapshot a resolution call for `company_id` reads.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::CompanyNotFound` for an unknown company.
    pub fn load_snapshot(&self, company_id: Option<&str>) -> Result<GuidanceSnapshot> {
        let master = self.load_master()?;
        let company = match company_id {
            Some(id) => Some(
                self.load_company(id)?
                    .ok_or_else(|| GuidanceError::CompanyNotFound { id: id.to_string() })?,
            ),
            None => None,
        };
        Ok(GuidanceSnapshot::build(master, company))
    }

    /// Exports the stored catalog in import format.
    pub fn export_catalog(&self) -> Result<CatalogDocument> {
        let master = self.load_master()?;
        let mut companies = Vec::new();
        for company in self.list_companies()? {
            if let Some(document) = self.load_company(&company.id)? {
                companies.push(document);
            }
        }
        Ok(CatalogDocument { master, companies })
    }

    /// Lists companies in import order.
    pub fn list_companies(&self) -> Result<Vec<CompanyAssignment>> {
        self.load_json(SELECT_COMPANIES_SQL, [], "companies")
    }

    fn load_questions(&self, scope: &str, origin: Origin) -> Result<Vec<Question>> {
        self.load_json(
            SELECT_QUESTIONS_SQL,
            params![scope, origin.as_str()],
            "questions",
        )
    }

    /// Runs a query whose first column is a JSON document and decodes each
    /// row.
    pub(super) fn load_json<T, P>(&self, sql: &str, params: P, what: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        P: Params,
    {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context(&format!("Failed to prepare {what} query"))?;
        let rows = stmt
            .query_map(params, |row| row.get::<_, String>(0))
            .db_context(&format!("Failed to query {what}"))?;

        let mut items = Vec::new();
        for row in rows {
            let data = row.db_context(&format!("Failed to read {what} row"))?;
            items.push(serde_json::from_str(&data)?);
        }
        Ok(items)
    }
}

fn insert_questions(
    tx: &Transaction<'_>,
    scope: &str,
    origin: Origin,
    questions: &[Question],
) -> Result<usize> {
    for (position, question) in questions.iter().enumerate() {
        tx.execute(
            INSERT_QUESTION_SQL,
            params![
                scope,
                origin.as_str(),
                question.id,
                position as i64,
                serde_json::to_string(question)?
            ],
        )
        .db_context("Failed to insert question")?;
    }
    Ok(questions.len())
}

fn insert_scoped<T, F>(
    tx: &Transaction<'_>,
    sql: &str,
    scope: &str,
    now: &str,
    items: &[T],
    id_of: F,
) -> Result<usize>
where
    T: Serialize,
    F: Fn(&T) -> &String,
{
    for (position, item) in items.iter().enumerate() {
        tx.execute(
            sql,
            params![
                scope,
                id_of(item),
                position as i64,
                serde_json::to_string(item)?,
                now
            ],
        )
        .db_context("Failed to insert library item")?;
    }
    Ok(items.len())
}

fn insert_rules(
    tx: &Transaction<'_>,
    scope: &str,
    rules: &[crate::models::GuidanceRule],
) -> Result<usize> {
    for (position, rule) in rules.iter().enumerate() {
        tx.execute(
            INSERT_RULE_SQL,
            params![scope, rule.id, position as i64, serde_json::to_string(rule)?],
        )
        .db_context("Failed to insert rule")?;
    }
    Ok(rules.len())
}
