//! Admin credential storage.

use crate::error::{IdentityError, IdentityErrorExt};
use crate::password;
use surrealdb::types::SurrealValue;
use tracing::info;
use waymark_database::Database;

/// A stored admin principal. Never leaves the slice.
#[derive(Debug, Clone, SurrealValue)]
pub struct AdminRecord {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, SurrealValue)]
struct CountRow {
    count: i64,
}

#[derive(Debug, Clone)]
pub struct AdminRepository {
    db: Database,
}

impl AdminRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Looks up an admin by username.
    ///
    /// # Errors
    /// Returns [`IdentityError::Storage`] on storage failures.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminRecord>, IdentityError> {
        let rows = self
            .db
            .query("SELECT username, password_hash FROM admin WHERE username = $username LIMIT 1")
            .bind(("username", username.to_owned()))
            .await
            .context("Loading admin record")?
            .take::<Vec<AdminRecord>>(0)
            .context("Parsing admin record")?;

        Ok(rows.into_iter().next())
    }

    /// Number of stored admin principals.
    ///
    /// # Errors
    /// Returns [`IdentityError::Storage`] on storage failures.
    pub async fn count(&self) -> Result<i64, IdentityError> {
        let rows = self
            .db
            .query("SELECT count() AS count FROM admin GROUP ALL")
            .await
            .context("Counting admins")?
            .take::<Vec<CountRow>>(0)
            .context("Parsing admin count")?;

        Ok(rows.first().map_or(0, |row| row.count))
    }

    /// Creates an admin with the given plaintext password (hashed here).
    ///
    /// # Errors
    /// Returns [`IdentityError::Storage`] on storage failures (including a
    /// duplicate username rejected by the unique index).
    pub async fn create(&self, username: &str, plain_password: &str) -> Result<(), IdentityError> {
        let hash = password::hash_password(plain_password)?;

        self.db
            .query("CREATE admin SET username = $username, password_hash = $password_hash")
            .bind(("username", username.to_owned()))
            .bind(("password_hash", hash))
            .await
            .context("Creating admin")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Persisting admin")?;

        Ok(())
    }

    /// Seeds the bootstrap admin when the table is empty.
    ///
    /// # Errors
    /// Returns [`IdentityError::Storage`] on storage failures.
    pub async fn ensure_bootstrap(
        &self,
        username: &str,
        plain_password: &str,
    ) -> Result<(), IdentityError> {
        if self.count().await? > 0 {
            return Ok(());
        }

        self.create(username, plain_password).await?;
        info!(%username, "Bootstrap admin created");
        Ok(())
    }
}
