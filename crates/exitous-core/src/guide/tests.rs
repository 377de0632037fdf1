//! Tests for the guide facade.

use tempfile::TempDir;

use super::*;
use crate::{
    error::GuidanceError,
    params::{CompanyScope, ContentId, ImportCatalog, ResolveGuidance},
    snapshot::CatalogDocument,
};

const CATALOG: &str = include_str!("../../tests/fixtures/catalog.json");

async fn create_test_guide() -> (TempDir, Guide) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let guide = GuideBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create guide");
    (temp_dir, guide)
}

async fn imported_guide() -> (TempDir, Guide) {
    let (temp_dir, guide) = create_test_guide().await;
    let document: CatalogDocument = serde_json::from_str(CATALOG).expect("Invalid fixture");
    guide
        .import_document(document)
        .await
        .expect("Failed to import catalog");
    (temp_dir, guide)
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let (_temp_dir, guide) = create_test_guide().await;
    assert!(guide.database_path().exists());
}

#[tokio::test]
async fn test_empty_store_resolves_nothing() {
    let (_temp_dir, guide) = create_test_guide().await;
    let report = guide
        .resolve(&ResolveGuidance::default())
        .await
        .expect("Failed to resolve");
    assert!(report.resolution.is_empty());
}

#[tokio::test]
async fn test_import_missing_file() {
    let (temp_dir, guide) = create_test_guide().await;
    let result = guide
        .import_catalog(&ImportCatalog {
            path: temp_dir.path().join("absent.json").display().to_string(),
        })
        .await;
    assert!(matches!(result, Err(GuidanceError::FileSystem { .. })));
}

#[tokio::test]
async fn test_import_from_file() {
    let (temp_dir, guide) = create_test_guide().await;
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG).expect("Failed to write catalog");

    let summary = guide
        .import_catalog(&ImportCatalog {
            path: path.display().to_string(),
        })
        .await
        .expect("Failed to import");
    assert_eq!(summary.companies, 2);
    assert_eq!(summary.rules, 7);
}

#[tokio::test]
async fn test_unknown_company_is_an_error() {
    let (_temp_dir, guide) = imported_guide().await;
    let result = guide
        .validate_rules(&CompanyScope {
            company_id: Some("initech".to_string()),
        })
        .await;
    assert!(matches!(
        result,
        Err(GuidanceError::CompanyNotFound { ref id }) if id == "initech"
    ));
}

#[tokio::test]
async fn test_archive_round_trip() {
    let (_temp_dir, guide) = imported_guide().await;
    let params = ContentId {
        company_id: None,
        id: "review-cobra".to_string(),
    };

    let archived = guide.archive_task(&params).await.expect("Failed to archive");
    assert!(!archived.item.is_active);

    let mut resolve = ResolveGuidance::default();
    resolve
        .answers
        .answers
        .insert("hadMedicalInsurance".to_string(), "Yes".into());
    let report = guide.resolve(&resolve).await.expect("Failed to resolve");
    assert!(report.resolution.tasks.is_empty());
    assert_eq!(report.resolution.fired_rules, ["R1"]);

    let restored = guide
        .unarchive_task(&params)
        .await
        .expect("Failed to unarchive");
    assert!(restored.item.is_active);
    let report = guide.resolve(&resolve).await.expect("Failed to resolve");
    assert_eq!(report.resolution.task_ids(), ["review-cobra"]);
}

#[tokio::test]
async fn test_archive_unknown_tip() {
    let (_temp_dir, guide) = imported_guide().await;
    let result = guide
        .archive_tip(&ContentId {
            company_id: Some("acme".to_string()),
            id: "tip-moving".to_string(),
        })
        .await;
    // tip-moving is master content, not an Acme custom tip
    assert!(matches!(result, Err(GuidanceError::TipNotFound { .. })));
}
