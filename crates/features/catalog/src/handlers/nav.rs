use crate::handlers::slice;
use crate::error::CatalogError;
use crate::model::{NavCategoryResponse, NavLinkResponse};
use axum::Json;
use axum::extract::State;
use waymark_derive::api_handler;
use waymark_domain::constants::CATALOG_TAG;
use waymark_domain::nav::NavigationConfig;
use waymark_kernel::server::ApiState;

#[api_handler(
    get,
    path = "/api/nav",
    responses((status = OK, description = "The full navigation document", body = [NavCategoryResponse])),
    tag = CATALOG_TAG,
)]
pub(super) async fn navigation_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<NavCategoryResponse>>, CatalogError> {
    let catalog = slice(&state)?;
    let nav = catalog.navigation().await?;
    Ok(Json(to_response(nav)))
}

fn to_response(nav: NavigationConfig) -> Vec<NavCategoryResponse> {
    nav.categories
        .into_iter()
        .map(|category| NavCategoryResponse {
            id: category.id,
            name: category.name,
            order: category.order,
            links: category
                .links
                .into_iter()
                .map(|link| NavLinkResponse {
                    id: link.id,
                    name: link.name,
                    url: link.url,
                    icon_url: link.icon_url,
                    description: link.description,
                    order: link.order,
                })
                .collect(),
        })
        .collect()
}
