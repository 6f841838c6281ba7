mod categories;
mod nav;
mod websites;

use crate::Catalog;
use crate::error::CatalogError;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use waymark_kernel::server::ApiState;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(nav::navigation_handler))
        .routes(routes!(categories::list_categories, categories::create_category))
        .routes(routes!(categories::update_category, categories::delete_category))
        .routes(routes!(websites::list_websites, websites::create_website))
        .routes(routes!(websites::update_website, websites::delete_website))
}

pub(crate) fn slice(state: &ApiState) -> Result<&Catalog, CatalogError> {
    state.try_get_slice::<Catalog>().map_err(|e| CatalogError::from(e.to_string()))
}
