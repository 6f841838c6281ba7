use crate::error::CatalogError;
use crate::handlers::slice;
use crate::model::{ListQuery, PaginatedWebsites, WebsiteCreate, WebsiteResponse, WebsiteUpdate};
use crate::repository::WebsiteFields;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::info;
use waymark_derive::api_handler;
use waymark_domain::constants::{CATALOG_TAG, CATEGORY, WEBSITE};
use waymark_identity::AdminSession;
use waymark_kernel::security::resource::ResourceGuard;
use waymark_kernel::server::ApiState;

const DEFAULT_PAGE_SIZE: usize = 10;

fn record_key(id: &str, table: &str) -> Result<String, CatalogError> {
    let verified = ResourceGuard::verify(id, table).map_err(|e| CatalogError::Validation {
        message: e.to_string().into(),
        context: None,
    })?;
    Ok(ResourceGuard::key(&verified).to_owned())
}

fn validate_url(url: &str) -> Result<(), CatalogError> {
    url::Url::parse(url).map_err(|e| CatalogError::Validation {
        message: format!("Invalid URL '{url}': {e}").into(),
        context: None,
    })?;
    Ok(())
}

#[api_handler(
    get,
    path = "/api/websites",
    params(ListQuery),
    responses((status = OK, description = "One page of link entries", body = PaginatedWebsites)),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_websites(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PaginatedWebsites>, CatalogError> {
    let catalog = slice(&state)?;

    let (rows, total) = if query.all {
        let rows = catalog.websites.list_all().await?;
        let total = rows.len();
        (rows, total)
    } else {
        let skip = query.skip.unwrap_or(0);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        let rows = catalog.websites.list(skip, limit).await?;
        let total = catalog.websites.count().await?;
        (rows, total)
    };

    Ok(Json(PaginatedWebsites { data: rows.into_iter().map(Into::into).collect(), total }))
}

#[api_handler(
    post,
    path = "/api/websites",
    request_body = WebsiteCreate,
    responses(
        (status = OK, description = "Created link entry", body = WebsiteResponse),
        (status = BAD_REQUEST, description = "Malformed URL"),
        (status = NOT_FOUND, description = "Unknown category"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn create_website(
    State(state): State<ApiState>,
    session: AdminSession,
    Json(payload): Json<WebsiteCreate>,
) -> Result<Json<WebsiteResponse>, CatalogError> {
    let catalog = slice(&state)?;
    validate_url(&payload.url)?;

    let category_key = record_key(&payload.category_id, CATEGORY)?;
    if catalog.categories.get(&category_key).await?.is_none() {
        return Err(CatalogError::NotFound {
            message: format!("Category '{}' not found", payload.category_id).into(),
            context: None,
        });
    }

    let (icon_url, description) =
        catalog.resolve_metadata(&payload.url, payload.icon_url, payload.description).await;

    let row = catalog
        .websites
        .create(WebsiteFields {
            name: payload.name,
            url: payload.url,
            icon_url,
            description,
            position: i64::from(payload.order),
            category_id: category_key,
        })
        .await?;

    info!(admin = %session.username, website = %row.id, "Website created");
    Ok(Json(row.into()))
}

#[api_handler(
    put,
    path = "/api/websites/{id}",
    request_body = WebsiteUpdate,
    params(("id" = String, Path, description = "Website record key")),
    responses(
        (status = OK, description = "Updated link entry", body = WebsiteResponse),
        (status = NOT_FOUND, description = "Unknown website or category"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn update_website(
    State(state): State<ApiState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<WebsiteUpdate>,
) -> Result<Json<WebsiteResponse>, CatalogError> {
    let catalog = slice(&state)?;
    let key = record_key(&id, WEBSITE)?;

    let existing = catalog.websites.get(&key).await?.ok_or_else(|| CatalogError::NotFound {
        message: format!("Website '{id}' not found").into(),
        context: None,
    })?;

    // Unset fields keep their stored values.
    let url = payload.url.unwrap_or(existing.url);
    validate_url(&url)?;

    let category_id = match payload.category_id {
        Some(requested) => {
            let category_key = record_key(&requested, CATEGORY)?;
            if catalog.categories.get(&category_key).await?.is_none() {
                return Err(CatalogError::NotFound {
                    message: format!("Category '{requested}' not found").into(),
                    context: None,
                });
            }
            category_key
        },
        None => existing.category_id.unwrap_or_default(),
    };

    let fields = WebsiteFields {
        name: payload.name.unwrap_or(existing.name),
        url,
        icon_url: payload.icon_url.or(existing.icon_url),
        description: payload.description.or(existing.description),
        position: payload.order.map_or(existing.position, i64::from),
        category_id,
    };

    let row = catalog.websites.update(&key, fields).await?;

    info!(admin = %session.username, website = %row.id, "Website updated");
    Ok(Json(row.into()))
}

#[api_handler(
    delete,
    path = "/api/websites/{id}",
    params(("id" = String, Path, description = "Website record key")),
    responses(
        (status = NO_CONTENT, description = "Link entry removed"),
        (status = NOT_FOUND, description = "Unknown website"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn delete_website(
    State(state): State<ApiState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> Result<StatusCode, CatalogError> {
    let catalog = slice(&state)?;
    let key = record_key(&id, WEBSITE)?;
    catalog.websites.delete(&key).await?;

    info!(admin = %session.username, website = %key, "Website deleted");
    Ok(StatusCode::NO_CONTENT)
}
