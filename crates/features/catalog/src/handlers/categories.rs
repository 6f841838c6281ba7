use crate::error::CatalogError;
use crate::handlers::slice;
use crate::model::{CategoryPayload, CategoryResponse};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;
use waymark_derive::api_handler;
use waymark_domain::constants::{CATALOG_TAG, CATEGORY};
use waymark_identity::AdminSession;
use waymark_kernel::security::resource::ResourceGuard;
use waymark_kernel::server::ApiState;

fn category_key(id: &str) -> Result<String, CatalogError> {
    let verified = ResourceGuard::verify(id, CATEGORY).map_err(|e| CatalogError::Validation {
        message: e.to_string().into(),
        context: None,
    })?;
    Ok(ResourceGuard::key(&verified).to_owned())
}

#[api_handler(
    get,
    path = "/api/categories",
    responses((status = OK, description = "Categories in display order", body = [CategoryResponse])),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CategoryResponse>>, CatalogError> {
    let catalog = slice(&state)?;
    let rows = catalog.categories.list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[api_handler(
    post,
    path = "/api/categories",
    request_body = CategoryPayload,
    responses(
        (status = OK, description = "Created category", body = CategoryResponse),
        (status = CONFLICT, description = "Duplicate category name"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn create_category(
    State(state): State<ApiState>,
    session: AdminSession,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryResponse>, CatalogError> {
    let catalog = slice(&state)?;
    let row = catalog.categories.create(&payload.name, i64::from(payload.order)).await?;

    info!(admin = %session.username, category = %row.id, "Category created");
    Ok(Json(row.into()))
}

#[api_handler(
    put,
    path = "/api/categories/{id}",
    request_body = CategoryPayload,
    params(("id" = String, Path, description = "Category record key")),
    responses(
        (status = OK, description = "Updated category", body = CategoryResponse),
        (status = NOT_FOUND, description = "Unknown category"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn update_category(
    State(state): State<ApiState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryResponse>, CatalogError> {
    let catalog = slice(&state)?;
    let key = category_key(&id)?;
    let row = catalog.categories.update(&key, &payload.name, i64::from(payload.order)).await?;

    info!(admin = %session.username, category = %row.id, "Category updated");
    Ok(Json(row.into()))
}

#[api_handler(
    delete,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category record key")),
    responses(
        (status = NO_CONTENT, description = "Category and its entries removed"),
        (status = NOT_FOUND, description = "Unknown category"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn delete_category(
    State(state): State<ApiState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> Result<StatusCode, CatalogError> {
    let catalog = slice(&state)?;
    let key = category_key(&id)?;
    catalog.categories.delete(&key).await?;

    info!(admin = %session.username, category = %key, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
