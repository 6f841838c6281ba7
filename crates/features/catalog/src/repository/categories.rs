use super::CategoryRow;
use crate::error::{CatalogError, CatalogErrorExt};
use waymark_database::Database;
use waymark_domain::constants::CATEGORY;
use waymark_kernel::safe_nanoid;

const SELECT_FIELDS: &str = "record::id(id) AS id, name, position";

#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// All categories in display order.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn list(&self) -> Result<Vec<CategoryRow>, CatalogError> {
        let rows = self
            .db
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM category ORDER BY position ASC, id ASC"
            ))
            .await
            .context("Listing categories")?
            .take::<Vec<CategoryRow>>(0)
            .context("Parsing categories")?;

        Ok(rows)
    }

    /// Looks up a single category by record key.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn get(&self, id: &str) -> Result<Option<CategoryRow>, CatalogError> {
        let rows = self
            .db
            .query(format!("SELECT {SELECT_FIELDS} FROM type::thing($table, $id)"))
            .bind(("table", CATEGORY))
            .bind(("id", id.to_owned()))
            .await
            .context("Loading category")?
            .take::<Vec<CategoryRow>>(0)
            .context("Parsing category")?;

        Ok(rows.into_iter().next())
    }

    /// Creates a category; duplicate names are rejected by the unique index.
    ///
    /// # Errors
    /// Returns [`CatalogError::Conflict`] on a duplicate name and
    /// [`CatalogError::Storage`] on other storage failures.
    pub async fn create(&self, name: &str, position: i64) -> Result<CategoryRow, CatalogError> {
        let id = safe_nanoid!();

        self.db
            .query("CREATE type::thing($table, $id) SET name = $name, position = $position")
            .bind(("table", CATEGORY))
            .bind(("id", id.clone()))
            .bind(("name", name.to_owned()))
            .bind(("position", position))
            .await
            .context("Creating category")?
            .check()
            .map_err(surrealdb::Error::from)
            .map_err(|e| conflict_on_duplicate_name(e, name))?;

        self.get(&id).await?.ok_or_else(|| CatalogError::Internal {
            message: "Created category vanished".into(),
            context: Some(id.into()),
        })
    }

    /// Renames/reorders a category.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] for unknown ids,
    /// [`CatalogError::Conflict`] on a duplicate name, and
    /// [`CatalogError::Storage`] on other storage failures.
    pub async fn update(&self, id: &str, name: &str, position: i64) -> Result<CategoryRow, CatalogError> {
        if self.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.db
            .query("UPDATE type::thing($table, $id) SET name = $name, position = $position")
            .bind(("table", CATEGORY))
            .bind(("id", id.to_owned()))
            .bind(("name", name.to_owned()))
            .bind(("position", position))
            .await
            .context("Updating category")?
            .check()
            .map_err(surrealdb::Error::from)
            .map_err(|e| conflict_on_duplicate_name(e, name))?;

        self.get(id).await?.ok_or_else(|| CatalogError::Internal {
            message: "Updated category vanished".into(),
            context: Some(id.to_owned().into()),
        })
    }

    /// Deletes a category and cascades to its link entries.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] for unknown ids and
    /// [`CatalogError::Storage`] on storage failures.
    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        if self.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.db
            .query(
                "BEGIN TRANSACTION;
                DELETE website WHERE category = type::thing($table, $id);
                DELETE type::thing($table, $id);
                COMMIT TRANSACTION;",
            )
            .bind(("table", CATEGORY))
            .bind(("id", id.to_owned()))
            .await
            .context("Deleting category")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Cascading category delete")?;

        Ok(())
    }
}

fn not_found(id: &str) -> CatalogError {
    CatalogError::NotFound { message: format!("Category '{id}' not found").into(), context: None }
}

fn conflict_on_duplicate_name(e: surrealdb::Error, name: &str) -> CatalogError {
    if e.to_string().contains("category_name") {
        CatalogError::Conflict {
            message: format!("Category '{name}' already exists").into(),
            context: None,
        }
    } else {
        CatalogError::Storage { source: e, context: Some("Persisting category".into()) }
    }
}
