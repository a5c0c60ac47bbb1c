
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::{catalog::Catalog, error::ApiError};

pub async fn list(State(catalog): State<Arc<Catalog>>) -> Response {
    let entries: Vec<_> = catalog.all_products().collect();
    debug!(count = entries.len(), "listing all products");
    Json(entries).into_response()
}

pub async fn by_category(
    State(catalog): State<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(category) = path?;
    let category = catalog.category(&category)?;
    let entries: Vec<_> = category.entries().collect();
    debug!(category = category.name(), count = entries.len(), "listing category");
    Ok(Json(entries).into_response())
}

pub async fn get_one(
    State(catalog): State<Arc<Catalog>>,
    path: Result<Path<(String, u64)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((category, id)) = path?;
    let entry = catalog.find_product(&category, id)?;
    debug!(category = entry.category, id, "product found");
    Ok(Json(entry).into_response())
}
