use exitous_core::{CatalogDocument, Guide, GuideBuilder};
use tempfile::TempDir;

pub const CATALOG: &str = include_str!("../fixtures/catalog.json");

/// Parses the shared catalog fixture.
pub fn catalog() -> CatalogDocument {
    serde_json::from_str(CATALOG).expect("Failed to parse catalog fixture")
}

/// Creates a guide on a temporary database with the fixture imported.
pub async fn create_test_guide() -> (TempDir, Guide) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let guide = GuideBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create guide");
    guide
        .import_document(catalog())
        .await
        .expect("Failed to import catalog");
    (temp_dir, guide)
}
