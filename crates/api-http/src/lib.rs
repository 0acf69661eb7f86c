// Brewlog HTTP API - REST surface over the catalog service

mod error;
mod handlers;

pub use error::ApiError;

use axum::routing::get;
use axum::Router;
use brewlog_core::application::CatalogService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
}

/// Build the REST router: list/get/create/update over `/coffee`, JSON
/// in and out, CORS open for all routes.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/coffee",
            get(handlers::list_coffees).post(handlers::create_coffee),
        )
        .route(
            "/coffee/{id}",
            get(handlers::get_coffee).put(handlers::update_coffee),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
