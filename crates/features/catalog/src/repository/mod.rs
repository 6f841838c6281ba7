//! SurrealDB-backed storage for the catalog.

mod categories;
mod websites;

pub use categories::CategoryRepository;
pub use websites::{WebsiteFields, WebsiteRepository};

use surrealdb::types::SurrealValue;

/// A stored category, with the record key projected out of the record id.
#[derive(Debug, Clone, SurrealValue)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub position: i64,
}

/// A stored link entry with its category joined in.
#[derive(Debug, Clone, SurrealValue)]
pub struct WebsiteRow {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon_url: Option<String>,
    pub description: Option<String>,
    pub position: i64,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, SurrealValue)]
pub(crate) struct CountRow {
    pub count: i64,
}

/// Stored positions are SurrealDB ints; the wire order is a u32.
pub(crate) fn order_of(position: i64) -> u32 {
    u32::try_from(position).unwrap_or_default()
}
