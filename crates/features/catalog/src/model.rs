//! Wire types for the catalog API.

use crate::repository::{CategoryRow, WebsiteRow, order_of};
use waymark_derive::api_model;

#[api_model]
/// A category as exposed over the wire.
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub order: u32,
}

#[api_model]
/// Payload for creating or replacing a category.
pub struct CategoryPayload {
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

#[api_model]
/// A link entry as exposed over the wire, with its category name joined in.
pub struct WebsiteResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: u32,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

#[api_model]
/// Payload for creating a link entry.
///
/// `icon_url` and `description` are optional; omitted values are resolved by
/// fetching the target page (icon discovery, meta description) with a
/// generated letter badge as the icon of last resort.
pub struct WebsiteCreate {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: u32,
    pub category_id: String,
}

#[api_model]
/// Partial update for a link entry; unset fields keep their stored values.
pub struct WebsiteUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub category_id: Option<String>,
}

#[api_model]
/// One page of link entries plus the unpaginated total.
pub struct PaginatedWebsites {
    pub data: Vec<WebsiteResponse>,
    pub total: usize,
}

#[api_model(deny_unknown_fields = false)]
#[derive(utoipa::IntoParams)]
/// Listing query: `skip`/`limit` paginate, `all=true` fetches everything.
pub struct ListQuery {
    #[serde(default)]
    pub skip: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub all: bool,
}

#[api_model]
/// A navigation link inside the public navigation document.
pub struct NavLinkResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: u32,
}

#[api_model]
/// A category with its links, in display order.
pub struct NavCategoryResponse {
    pub id: String,
    pub name: String,
    pub order: u32,
    pub links: Vec<NavLinkResponse>,
}

impl From<CategoryRow> for CategoryResponse {
    fn from(row: CategoryRow) -> Self {
        Self { id: row.id, name: row.name, order: order_of(row.position) }
    }
}

impl From<WebsiteRow> for WebsiteResponse {
    fn from(row: WebsiteRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
            icon_url: row.icon_url,
            description: row.description,
            order: order_of(row.position),
            category_id: row.category_id.unwrap_or_default(),
            category_name: row.category_name,
        }
    }
}
