use surrealdb::types::SurrealValue;
use waymark_database::*;

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    // Health should be OK for mem://
    db.health().await.expect("health check");
    db.use_ns("test_ns").use_db("test_db").await.expect("session switch");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[derive(Debug, SurrealValue)]
struct MigrationRow {
    slice_key: String,
    version: String,
    checksum: String,
}

#[tokio::test]
async fn migrations_define_catalog_schema() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "migrations")
        .init()
        .await
        .expect("connect to mem://");

    // The built-in manifest must be recorded with checksums.
    let rows = db
        .query("SELECT slice_key, version, checksum FROM migration")
        .await
        .expect("select migrations")
        .take::<Vec<MigrationRow>>(0)
        .expect("migration rows");
    assert!(rows.len() >= 2, "catalog and identity migrations should be recorded");
    assert!(rows.iter().all(|row| row.checksum.len() == 64), "checksums are hex sha-256");

    // The catalog schema should accept a well-formed category row.
    db.query("CREATE category:smoke SET name = 'Smoke', position = 1")
        .await
        .expect("create category")
        .check()
        .expect("schema accepts category row");
}
