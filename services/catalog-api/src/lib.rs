//! Read-only product catalog served over HTTP as JSON.
//!
//! The catalog is built once at startup and shared with every handler behind an
//! `Arc`; nothing ever writes to it, so handlers need no locking.

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod catalog;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use catalog::Catalog;

/// Builds the full service: routes, fallback, CORS and request middleware.
pub fn app(catalog: Arc<Catalog>, enable_openapi: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::info::get))
        .route("/products", get(routes::products::list))
        .route("/products/{category}", get(routes::products::by_category))
        .route("/product/{category}/{id}", get(routes::products::get_one))
        .route("/categories", get(routes::categories::list))
        .route("/health", get(routes::health::get));

    if enable_openapi {
        app = app.route("/openapi.json", get(|| async { Json(openapi::openapi_spec()) }));
    }

    app.fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(axum_middleware::from_fn(middleware::tracing::trace))
        .layer(axum_middleware::from_fn(middleware::request_id::request_id))
        .with_state(catalog)
}
