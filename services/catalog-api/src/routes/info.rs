
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::Catalog;

/// Endpoint name -> path template, as advertised on `/`.
pub const ENDPOINTS: [(&str, &str); 6] = [
    ("home", "/"),
    ("all_products", "/products"),
    ("products_by_category", "/products/<category>"),
    ("specific_product", "/product/<category>/<id>"),
    ("categories", "/categories"),
    ("health", "/health"),
];

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
    pub available_categories: Vec<String>,
}

pub async fn get(State(catalog): State<Arc<Catalog>>) -> Json<ServiceInfo> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(name, path)| (name.to_string(), serde_json::Value::from(*path)))
        .collect();
    Json(ServiceInfo {
        message: "Product API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
        available_categories: catalog.categories(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn describes_service() {
        let Json(info) = get(State(Arc::new(Catalog::reference()))).await;
        assert_eq!(info.message, "Product API");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.endpoints.len(), 6);
        assert_eq!(info.endpoints["specific_product"], "/product/<category>/<id>");
        assert_eq!(info.available_categories.len(), 3);
    }
}
