use super::{CountRow, WebsiteRow};
use crate::error::{CatalogError, CatalogErrorExt};
use waymark_database::Database;
use waymark_domain::constants::{CATEGORY, WEBSITE};
use waymark_kernel::safe_nanoid;

const SELECT_FIELDS: &str = "record::id(id) AS id, name, url, icon_url, description, position, \
     record::id(category) AS category_id, category.name AS category_name";

/// The stored shape of a link entry, minus its id.
#[derive(Debug, Clone)]
pub struct WebsiteFields {
    pub name: String,
    pub url: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub position: i64,
    pub category_id: String,
}

#[derive(Debug, Clone)]
pub struct WebsiteRepository {
    db: Database,
}

impl WebsiteRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// One page of link entries in display order.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn list(&self, skip: usize, limit: usize) -> Result<Vec<WebsiteRow>, CatalogError> {
        let rows = self
            .db
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM website \
                 ORDER BY position ASC, id ASC LIMIT $limit START $skip"
            ))
            .bind(("limit", i64::try_from(limit).unwrap_or(i64::MAX)))
            .bind(("skip", i64::try_from(skip).unwrap_or(i64::MAX)))
            .await
            .context("Listing websites")?
            .take::<Vec<WebsiteRow>>(0)
            .context("Parsing websites")?;

        Ok(rows)
    }

    /// Every link entry in display order.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn list_all(&self) -> Result<Vec<WebsiteRow>, CatalogError> {
        let rows = self
            .db
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM website ORDER BY position ASC, id ASC"
            ))
            .await
            .context("Listing websites")?
            .take::<Vec<WebsiteRow>>(0)
            .context("Parsing websites")?;

        Ok(rows)
    }

    /// Unpaginated number of link entries.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn count(&self) -> Result<usize, CatalogError> {
        let rows = self
            .db
            .query("SELECT count() AS count FROM website GROUP ALL")
            .await
            .context("Counting websites")?
            .take::<Vec<CountRow>>(0)
            .context("Parsing website count")?;

        Ok(rows.first().map_or(0, |row| usize::try_from(row.count).unwrap_or_default()))
    }

    /// Looks up a single link entry by record key.
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn get(&self, id: &str) -> Result<Option<WebsiteRow>, CatalogError> {
        let rows = self
            .db
            .query(format!("SELECT {SELECT_FIELDS} FROM type::thing($table, $id)"))
            .bind(("table", WEBSITE))
            .bind(("id", id.to_owned()))
            .await
            .context("Loading website")?
            .take::<Vec<WebsiteRow>>(0)
            .context("Parsing website")?;

        Ok(rows.into_iter().next())
    }

    /// Creates a link entry. The referenced category must exist (enforced by
    /// the schema's record type).
    ///
    /// # Errors
    /// Returns [`CatalogError::Storage`] on storage failures.
    pub async fn create(&self, fields: WebsiteFields) -> Result<WebsiteRow, CatalogError> {
        let id = safe_nanoid!();

        self.db
            .query(
                "CREATE type::thing($table, $id) SET
                    name = $name,
                    url = $url,
                    icon_url = $icon_url,
                    description = $description,
                    position = $position,
                    category = type::thing($category_table, $category_id)",
            )
            .bind(("table", WEBSITE))
            .bind(("id", id.clone()))
            .bind(("name", fields.name))
            .bind(("url", fields.url))
            .bind(("icon_url", fields.icon_url))
            .bind(("description", fields.description))
            .bind(("position", fields.position))
            .bind(("category_table", CATEGORY))
            .bind(("category_id", fields.category_id))
            .await
            .context("Creating website")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Persisting website")?;

        self.get(&id).await?.ok_or_else(|| CatalogError::Internal {
            message: "Created website vanished".into(),
            context: Some(id.into()),
        })
    }

    /// Replaces the stored fields of a link entry.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] for unknown ids and
    /// [`CatalogError::Storage`] on storage failures.
    pub async fn update(&self, id: &str, fields: WebsiteFields) -> Result<WebsiteRow, CatalogError> {
        if self.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.db
            .query(
                "UPDATE type::thing($table, $id) SET
                    name = $name,
                    url = $url,
                    icon_url = $icon_url,
                    description = $description,
                    position = $position,
                    category = type::thing($category_table, $category_id)",
            )
            .bind(("table", WEBSITE))
            .bind(("id", id.to_owned()))
            .bind(("name", fields.name))
            .bind(("url", fields.url))
            .bind(("icon_url", fields.icon_url))
            .bind(("description", fields.description))
            .bind(("position", fields.position))
            .bind(("category_table", CATEGORY))
            .bind(("category_id", fields.category_id))
            .await
            .context("Updating website")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Persisting website update")?;

        self.get(id).await?.ok_or_else(|| CatalogError::Internal {
            message: "Updated website vanished".into(),
            context: Some(id.to_owned().into()),
        })
    }

    /// Deletes a link entry.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] for unknown ids and
    /// [`CatalogError::Storage`] on storage failures.
    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        if self.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.db
            .query("DELETE type::thing($table, $id)")
            .bind(("table", WEBSITE))
            .bind(("id", id.to_owned()))
            .await
            .context("Deleting website")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Persisting website delete")?;

        Ok(())
    }
}

fn not_found(id: &str) -> CatalogError {
    CatalogError::NotFound { message: format!("Website '{id}' not found").into(), context: None }
}
