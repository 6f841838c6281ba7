use crate::error::{DatabaseError, DatabaseErrorExt};
use crate::manifest::builtin_migrations;
use fxhash::FxHashMap;
use sha2::{Digest, Sha256};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

#[derive(Debug)]
pub(crate) struct Migration {
    pub slice_key: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

impl Migration {
    #[must_use]
    pub(crate) const fn new(
        slice_key: &'static str,
        version: &'static str,
        script: &'static str,
    ) -> Self {
        Self { slice_key, version, script }
    }

    /// Content checksum recorded alongside the applied migration.
    fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.script.as_bytes()))
    }

    fn to_applied(&self) -> AppliedMigration {
        AppliedMigration {
            slice_key: self.slice_key.to_owned(),
            version: self.version.to_owned(),
            checksum: self.checksum(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<AppliedMigration>,
    pub skipped: Vec<AppliedMigration>,
}

#[derive(Debug, SurrealValue)]
pub(crate) struct AppliedMigration {
    pub slice_key: String,
    pub version: String,
    pub checksum: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner {
    db: Surreal<Any>,
}

impl MigrationRunner {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        let mut report = MigrationReport::default();
        let applied_migrations = self.get_migrations_map().await?;

        for migration in builtin_migrations() {
            if let Some(applied) =
                applied_migrations.get(&format!("{}:{}", migration.slice_key, migration.version))
            {
                ensure_checksum_match(&migration, &applied.checksum)?;
                report.skipped.push(migration.to_applied());
                continue;
            }

            self.apply_migration(&migration).await?;
            report.applied.push(migration.to_applied());
        }

        Ok(report)
    }

    async fn apply_migration(&self, migration: &Migration) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration SET
                slice_key = $slice_key,
                version = $version,
                checksum = $checksum,
                applied_at = time::now();
            COMMIT TRANSACTION;",
            migration.script,
        );

        let _ = self
            .db
            .query(&query)
            .bind(("slice_key", migration.slice_key))
            .bind(("version", migration.version))
            .bind(("checksum", migration.checksum()))
            .await
            .context(format!(
                "SQL execution failed at {}:{}",
                migration.slice_key, migration.version
            ))?;

        Ok(())
    }

    async fn get_migrations_map(
        &self,
    ) -> Result<FxHashMap<String, AppliedMigration>, DatabaseError> {
        // A fresh namespace has no migration table yet; the select is empty.
        let entries = self
            .db
            .query("SELECT slice_key, version, checksum FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .context("Parsing migrations map")?;

        Ok(entries
            .into_iter()
            .map(|entry| (format!("{}:{}", entry.slice_key, entry.version), entry))
            .collect())
    }
}

fn ensure_checksum_match(migration: &Migration, existing: &str) -> Result<(), DatabaseError> {
    let expected = migration.checksum();
    if existing != expected {
        return Err(DatabaseError::Migration {
            message: format!(
                "Checksum mismatch for {}:{} (expected {}, got {})",
                migration.slice_key, migration.version, existing, expected
            )
            .into(),
            context: Some("Migration already applied with different checksum".into()),
        });
    }
    Ok(())
}
