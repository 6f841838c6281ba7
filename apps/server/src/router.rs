use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use waymark::features::catalog::ICONS_ROUTE;
use waymark::kernel::prelude::ApiState;

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let cfg = state.config.clone();
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(waymark::server::router::system_router())
        .merge(waymark::features::identity::router())
        .merge(waymark::features::catalog::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let api_routes = if cfg.server.permissive_cors {
        openapi_routes.layer(CorsLayer::permissive())
    } else {
        openapi_routes
    };

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Static surfaces: generated icons, and the built front-end with an SPA
    // index fallback for client-side routes.
    let icons = ServeDir::new(cfg.storage.data_dir.join("icons"));
    let spa = ServeDir::new(&cfg.storage.static_dir)
        .not_found_service(ServeFile::new(cfg.storage.static_dir.join("index.html")));

    // Merge all routes and then apply the state to the final router
    Router::new()
        .merge(api_routes)
        .merge(scalar_routes)
        .nest_service(ICONS_ROUTE, icons)
        .fallback_service(spa)
}
